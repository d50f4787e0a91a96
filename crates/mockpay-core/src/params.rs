//! Typed parameter structures for the plan and product handlers.
//!
//! The generic handlers take raw [`Params`]; these structs are a typed front
//! for callers that know which resource they address. Every field is
//! optional and omitted from the raw params when `None`, so a typed request
//! can still be missing a required field and be rejected exactly like a raw
//! one.
//!
//! `amount` is a [`Number`] rather than an integer so that fractional
//! amounts can be sent and rejected the way the remote service rejects them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::models::{Interval, Params};

/// Converts any serializable request struct into raw params.
pub fn to_params<T: Serialize>(value: &T) -> Params {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Params::new(),
    }
}

/// Parameters for creating a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Explicit ID; generated as `test_plan_<n>` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ID of an existing product (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Price in minor units (required, whole number)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    /// Currency code (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Billing interval (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i64>,
}

impl CreatePlan {
    pub fn to_params(&self) -> Params {
        to_params(self)
    }
}

/// Parameters for updating a plan. Only the fields set are overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i64>,
}

impl UpdatePlan {
    pub fn to_params(&self) -> Params {
        to_params(self)
    }
}

/// Parameters for creating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Explicit ID; generated as `test_product_<n>` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl CreateProduct {
    pub fn to_params(&self) -> Params {
        to_params(self)
    }
}

/// Parameters for updating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl UpdateProduct {
    pub fn to_params(&self) -> Params {
        to_params(self)
    }
}

/// Parameters for listing records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of records to return; unbounded when absent
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListOptions {
    pub fn limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let params = CreatePlan {
            product: Some("prod_1".to_string()),
            amount: Some(9900.into()),
            ..Default::default()
        }
        .to_params();

        assert_eq!(params.len(), 2);
        assert_eq!(params["amount"], json!(9900));
        assert!(!params.contains_key("id"));
        assert!(!params.contains_key("currency"));
    }

    #[test]
    fn test_interval_serializes_lowercase() {
        let params = CreatePlan {
            interval: Some(Interval::Month),
            ..Default::default()
        }
        .to_params();
        assert_eq!(params["interval"], json!("month"));
    }

    #[test]
    fn test_fractional_amount_survives_conversion() {
        let params = UpdatePlan {
            amount: Number::from_f64(99.99),
            ..Default::default()
        }
        .to_params();
        assert_eq!(params["amount"].to_string(), "99.99");
    }
}
