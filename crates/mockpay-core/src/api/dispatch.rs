//! Serialized request dispatch.
//!
//! An [`Operation`] is one request in data form, e.g.
//!
//! ```json
//! {"method": "create", "resource": "plan", "params": {"amount": 9900}}
//! {"method": "retrieve", "resource": "plan", "id": "plan_1"}
//! {"method": "list", "resource": "plan", "limit": 10}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FakeApi;
use crate::{error::Result, models::Params, params::ListOptions};

/// One request against the fake API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Operation {
    Create {
        resource: String,
        #[serde(default)]
        params: Params,
    },
    Retrieve {
        resource: String,
        id: String,
    },
    Update {
        resource: String,
        id: String,
        #[serde(default)]
        params: Params,
    },
    Delete {
        resource: String,
        id: String,
    },
    List {
        resource: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },
}

impl Operation {
    /// The resource type the operation addresses.
    pub fn resource(&self) -> &str {
        match self {
            Self::Create { resource, .. }
            | Self::Retrieve { resource, .. }
            | Self::Update { resource, .. }
            | Self::Delete { resource, .. }
            | Self::List { resource, .. } => resource,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Retrieve { .. } => "retrieve",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::List { .. } => "list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrieve { resource, id }
            | Self::Update { resource, id, .. }
            | Self::Delete { resource, id } => write!(f, "{} {resource} {id}", self.method()),
            _ => write!(f, "{} {}", self.method(), self.resource()),
        }
    }
}

impl FakeApi {
    /// Runs `operation` and returns the response body.
    ///
    /// Records come back as JSON objects, deletions as
    /// `{"id", "object", "deleted"}` and lists as the list envelope.
    pub fn dispatch(&self, operation: &Operation) -> Result<Value> {
        match operation {
            Operation::Create { resource, params } => {
                self.create(resource, params).map(Value::Object)
            }
            Operation::Retrieve { resource, id } => self.retrieve(resource, id).map(Value::Object),
            Operation::Update {
                resource,
                id,
                params,
            } => self.update(resource, id, params).map(Value::Object),
            Operation::Delete { resource, id } => self.delete(resource, id).map(Value::from),
            Operation::List { resource, limit } => self
                .list(resource, &ListOptions { limit: *limit })
                .map(Value::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn op(value: Value) -> Operation {
        serde_json::from_value(value).expect("valid operation")
    }

    #[test]
    fn test_operation_parsing() {
        assert_eq!(
            op(json!({"method": "retrieve", "resource": "plan", "id": "p"})),
            Operation::Retrieve {
                resource: "plan".to_string(),
                id: "p".to_string()
            }
        );
        assert_eq!(
            op(json!({"method": "list", "resource": "plan"})),
            Operation::List {
                resource: "plan".to_string(),
                limit: None
            }
        );
        assert!(serde_json::from_value::<Operation>(json!({"method": "archive"})).is_err());
    }

    #[test]
    fn test_operation_display() {
        let retrieve = op(json!({"method": "retrieve", "resource": "plan", "id": "p"}));
        assert_eq!(retrieve.to_string(), "retrieve plan p");
        let create = op(json!({"method": "create", "resource": "product"}));
        assert_eq!(create.to_string(), "create product");
    }

    #[test]
    fn test_dispatch_round_trip() {
        let api = FakeApi::new();
        let product = api
            .dispatch(&op(json!({
                "method": "create",
                "resource": "product",
                "params": {"name": "Widget"}
            })))
            .expect("create product");
        assert_eq!(product["id"], "test_product_1");

        let deleted = api
            .dispatch(&op(json!({"method": "delete", "resource": "product", "id": "test_product_1"})))
            .expect("delete product");
        assert_eq!(deleted, json!({"id": "test_product_1", "object": "product", "deleted": true}));

        let list = api
            .dispatch(&op(json!({"method": "list", "resource": "product"})))
            .expect("list products");
        assert_eq!(list["object"], "list");
        assert_eq!(list["data"], json!([]));
        assert_eq!(list["has_more"], false);
        assert_eq!(list["url"], "/v1/products");
    }

    #[test]
    fn test_dispatch_unknown_resource() {
        let api = FakeApi::new();
        let err = api
            .dispatch(&op(json!({"method": "list", "resource": "coupon"})))
            .expect_err("coupon is not registered");
        assert_eq!(err.message(), "Unrecognized resource type: coupon");
        assert_eq!(err.http_status(), 404);
    }
}
