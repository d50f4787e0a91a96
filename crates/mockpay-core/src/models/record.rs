//! Untyped attribute records as stored and returned by the fake API.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{RequestError, Result};

/// A stored resource: attribute name to JSON value.
pub type Record = Map<String, Value>;

/// Request parameters: same shape as a record, before validation.
pub type Params = Map<String, Value>;

/// Attribute holding the record ID.
pub const ID: &str = "id";

/// Attributes set by the fake itself; callers can never overwrite them.
pub const ENVELOPE_FIELDS: [&str; 4] = [ID, "object", "created", "livemode"];

/// Returns whether `field` is absent or explicitly null.
pub fn is_missing(params: &Params, field: &str) -> bool {
    params.get(field).map_or(true, Value::is_null)
}

/// Reads the `id` attribute as a string, if one was supplied.
///
/// Numeric IDs are accepted and converted to their decimal form; null and
/// absent IDs yield `None`. Any other type is rejected during validation
/// before this is consulted.
pub fn id_of(params: &Params) -> Option<String> {
    match params.get(ID)? {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decodes a stored record into one of the typed models.
pub fn decode<T: DeserializeOwned>(resource: &str, record: Record) -> Result<T> {
    serde_json::from_value(Value::Object(record)).map_err(|e| {
        RequestError::invalid(resource).with_message(format!("Invalid {resource} record: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_is_missing_treats_null_as_absent() {
        let p = params(json!({"amount": null, "currency": "usd"}));
        assert!(is_missing(&p, "amount"));
        assert!(is_missing(&p, "interval"));
        assert!(!is_missing(&p, "currency"));
    }

    #[test]
    fn test_id_of() {
        assert_eq!(id_of(&params(json!({"id": "plan_1"}))), Some("plan_1".to_string()));
        assert_eq!(id_of(&params(json!({"id": 42}))), Some("42".to_string()));
        assert_eq!(id_of(&params(json!({"id": null}))), None);
        assert_eq!(id_of(&params(json!({}))), None);
    }
}
