//! Response envelopes for delete and list requests.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::Record;

/// Confirmation returned by a delete request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

impl Deleted {
    /// Confirmation for the removal of `id` from `resource`.
    pub fn new(resource: &str, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: resource.to_string(),
            deleted: true,
        }
    }
}

/// One page of records returned by a list request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct List<T> {
    /// Always `"list"`
    pub object: String,
    pub data: Vec<T>,
    /// Whether records were cut off by the requested limit
    pub has_more: bool,
    pub url: String,
}

impl<T> List<T> {
    /// Wrap a page of `resource` records.
    pub fn new(resource: &str, data: Vec<T>, has_more: bool) -> Self {
        Self {
            object: "list".to_string(),
            data,
            has_more,
            url: format!("/v1/{resource}s"),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Convert every record on the page, failing on the first error.
    pub fn try_map<U, E, F>(self, f: F) -> Result<List<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let data = self.data.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(List {
            object: self.object,
            data,
            has_more: self.has_more,
            url: self.url,
        })
    }
}

impl From<Deleted> for Value {
    fn from(deleted: Deleted) -> Self {
        json!({
            "id": deleted.id,
            "object": deleted.object,
            "deleted": deleted.deleted,
        })
    }
}

impl From<List<Record>> for Value {
    fn from(list: List<Record>) -> Self {
        json!({
            "object": list.object,
            "data": list.data.into_iter().map(Value::Object).collect::<Vec<_>>(),
            "has_more": list.has_more,
            "url": list.url,
        })
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
