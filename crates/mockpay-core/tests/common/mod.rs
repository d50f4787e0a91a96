use mockpay_core::{fixtures, FakeApi, Params};
use serde_json::Value;

/// Helper function to create a fake with the default product in place
pub fn create_test_api() -> FakeApi {
    let api = FakeApi::new();
    fixtures::create_product(&api, Params::new()).expect("Failed to create product");
    api
}

/// Default plan params with `overrides` written over them
#[allow(dead_code)]
pub fn plan_params(overrides: Value) -> Params {
    fixtures::merged(fixtures::plan_params(), fixtures::overrides(overrides))
}
