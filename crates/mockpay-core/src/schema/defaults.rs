//! Built-in schemas mirroring the remote service's plan and product rules.

use serde_json::{json, Value};

use super::currencies::SUPPORTED_CURRENCIES;
use super::{Inclusion, InclusionMessage, MissingMessage, Schema};

pub const PLAN: &str = "plan";
pub const PRODUCT: &str = "product";

/// Allowed plan intervals, in the order the remote service lists them.
pub const INTERVALS: [&str; 4] = ["day", "month", "week", "year"];

/// Upper bound of the count fields, which plans hold as `u32`.
pub const MAX_COUNT: i64 = u32::MAX as i64;

/// Plan schema. Plans price an existing product.
pub fn plan() -> Schema {
    Schema::new(PLAN, "Plan")
        .require_with("amount", MissingMessage::RequiresParameter)
        .require("currency")
        .require("interval")
        .require("product")
        .reference("product", PRODUCT)
        .integer("amount", None)
        .integer_in("interval_count", 1..=MAX_COUNT)
        .integer_in("trial_period_days", 0..=MAX_COUNT)
        .inclusion(Inclusion {
            field: "interval".to_string(),
            values: INTERVALS.map(String::from).to_vec(),
            case_insensitive: false,
            message: InclusionMessage::OneOf,
        })
        .inclusion(Inclusion {
            field: "currency".to_string(),
            values: SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            case_insensitive: true,
            message: InclusionMessage::Supported,
        })
        .map("metadata")
        .string("product")
        .string("nickname")
        .string("name")
        .boolean("active")
        .default_value("interval_count", json!(1))
        .default_value("active", Value::Bool(true))
        .default_value("metadata", json!({}))
}

/// Product schema.
pub fn product() -> Schema {
    Schema::new(PRODUCT, "Product")
        .require("name")
        .map("metadata")
        .string("name")
        .string("description")
        .boolean("active")
        .default_value("active", Value::Bool(true))
        .default_value("metadata", json!({}))
}
