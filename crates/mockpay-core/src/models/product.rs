//! Product model definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored product. Plans reference products by ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier within the product store
    pub id: String,

    /// Always `"product"`
    #[serde(default)]
    pub object: String,

    pub name: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Creation time in Unix seconds
    #[serde(default)]
    pub created: i64,

    #[serde(default)]
    pub livemode: bool,
}
