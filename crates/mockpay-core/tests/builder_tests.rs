use std::fs;

use mockpay_core::{
    schema::{Inclusion, InclusionMessage},
    FakeApiBuilder, Schema, SchemaRegistry, SetupError,
};
use serde_json::json;
use tempfile::TempDir;

fn coupon_schema() -> Schema {
    Schema::new("coupon", "Coupon")
        .require("duration")
        .integer("percent_off", Some(0))
        .inclusion(Inclusion {
            field: "duration".to_string(),
            values: ["forever", "once", "repeating"].map(String::from).to_vec(),
            case_insensitive: false,
            message: InclusionMessage::OneOf,
        })
}

#[test]
fn test_build_with_extra_schema() {
    let api = FakeApiBuilder::new()
        .with_schema(coupon_schema())
        .build()
        .expect("Failed to build fake");

    assert!(api.registry().contains("plan"));
    let coupon = api
        .create("coupon", &mockpay_core::fixtures::overrides(json!({"duration": "once"})))
        .expect("Failed to create coupon");
    assert_eq!(coupon["id"], "test_coupon_1");

    let err = api
        .create("coupon", &mockpay_core::fixtures::overrides(json!({"duration": "twice"})))
        .expect_err("bad duration");
    assert_eq!(err.message(), "Invalid duration: must be one of forever, once, or repeating");
}

#[test]
fn test_build_from_schema_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("schemas.json");
    let registry = SchemaRegistry::empty().with(coupon_schema());
    fs::write(
        &path,
        serde_json::to_string_pretty(&registry).expect("serialize registry"),
    )
    .expect("Failed to write schema file");

    let api = FakeApiBuilder::new()
        .with_registry(SchemaRegistry::default())
        .with_schema_file(Some(&path))
        .build()
        .expect("Failed to build fake");

    assert!(api.registry().contains("coupon"));
    assert!(!api.registry().contains("plan"));
    let err = api
        .retrieve("plan", "p")
        .expect_err("plan is not registered");
    assert_eq!(err.message(), "Unrecognized resource type: plan");
}

#[test]
fn test_build_with_missing_schema_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = FakeApiBuilder::new()
        .with_schema_file(Some(temp_dir.path().join("absent.json")))
        .build()
        .expect_err("file does not exist");
    assert!(matches!(err, SetupError::FileSystem { .. }));
}

#[test]
fn test_build_with_malformed_schema_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("schemas.json");
    fs::write(&path, "{not json").expect("Failed to write schema file");

    let err = FakeApiBuilder::new()
        .with_schema_file(Some(&path))
        .build()
        .expect_err("file is not json");
    assert!(matches!(err, SetupError::Serialization { .. }));
}

#[test]
fn test_build_rejects_dangling_reference() {
    let err = FakeApiBuilder::new()
        .with_registry(SchemaRegistry::empty())
        .with_schema(Schema::new("plan", "Plan").reference("product", "product"))
        .build()
        .expect_err("product schema is absent");
    assert!(matches!(err, SetupError::Configuration { .. }));
}

#[test]
fn test_without_schema_file_uses_defaults() {
    let api = FakeApiBuilder::new()
        .with_schema_file(None::<&str>)
        .build()
        .expect("Failed to build fake");
    let names: Vec<_> = api.registry().names().collect();
    assert_eq!(names, vec!["product", "plan"]);
}
