//! Default records for tests that need a valid plan or product in place.
//!
//! ```rust
//! use mockpay_core::{fixtures, FakeApi};
//! use serde_json::json;
//!
//! let api = FakeApi::new();
//! fixtures::create_product(&api, fixtures::overrides(json!({})))?;
//! let plan = fixtures::create_plan(&api, fixtures::overrides(json!({"amount": 1331})))?;
//! assert_eq!(plan["amount"], 1331);
//! assert_eq!(plan["product"], fixtures::DEFAULT_PRODUCT_ID);
//! # Ok::<(), mockpay_core::RequestError>(())
//! ```

use serde_json::{json, Value};

use crate::{
    api::FakeApi,
    error::Result,
    models::{Params, Record},
    schema::defaults::{PLAN, PRODUCT},
};

pub const DEFAULT_PLAN_ID: &str = "mock_default_plan_id";
pub const DEFAULT_PRODUCT_ID: &str = "mock_default_product_id";

/// Valid params for the default product.
pub fn product_params() -> Params {
    overrides(json!({
        "id": DEFAULT_PRODUCT_ID,
        "name": "Default Product",
    }))
}

/// Valid params for the default plan, which prices the default product.
pub fn plan_params() -> Params {
    overrides(json!({
        "id": DEFAULT_PLAN_ID,
        "product": DEFAULT_PRODUCT_ID,
        "name": "Mock Default Plan",
        "amount": 1337,
        "currency": "usd",
        "interval": "month",
    }))
}

/// Turns a JSON object literal into params; anything else yields no params.
pub fn overrides(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

/// `base` with every field of `overrides` written over it.
pub fn merged(mut base: Params, overrides: Params) -> Params {
    base.extend(overrides);
    base
}

/// Creates the default product with `overrides` applied.
pub fn create_product(api: &FakeApi, overrides: Params) -> Result<Record> {
    api.create(PRODUCT, &merged(product_params(), overrides))
}

/// Creates the default plan with `overrides` applied.
///
/// The referenced product must already exist.
pub fn create_plan(api: &FakeApi, overrides: Params) -> Result<Record> {
    api.create(PLAN, &merged(plan_params(), overrides))
}
