use serde_json::json;

use super::*;

#[test]
fn test_default_registry_has_plan_and_product() {
    let registry = SchemaRegistry::default();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["product", "plan"]);
    assert!(registry.check().is_ok());

    let plan = registry.get("plan").expect("plan schema");
    let required: Vec<_> = plan.required.iter().map(|r| r.field.as_str()).collect();
    assert_eq!(required, vec!["amount", "currency", "interval", "product"]);
    assert_eq!(plan.required[0].message, MissingMessage::RequiresParameter);
    assert!(plan.is_integer("amount"));
    assert!(!plan.is_integer("currency"));
}

#[test]
fn test_register_replaces_existing_schema() {
    let mut registry = SchemaRegistry::default();
    registry.register(Schema::new("product", "Product").require("name").require("type"));

    assert_eq!(registry.iter().count(), 2);
    assert_eq!(registry.get("product").expect("product").required.len(), 2);
}

#[test]
fn test_check_rejects_dangling_reference() {
    let registry = SchemaRegistry::empty().with(defaults::plan());
    let err = registry.check().expect_err("product is not registered");
    assert!(err.to_string().contains("unknown resource 'product'"));
}

#[test]
fn test_check_rejects_duplicates_and_empty_sets() {
    let duplicated: SchemaRegistry = serde_json::from_value(json!([
        {"name": "coupon", "display_name": "Coupon"},
        {"name": "coupon", "display_name": "Coupon"}
    ]))
    .expect("valid registry json");
    assert!(duplicated.check().is_err());

    let empty_set = SchemaRegistry::empty().with(Schema::new("coupon", "Coupon").inclusion(Inclusion {
        field: "duration".to_string(),
        values: Vec::new(),
        case_insensitive: false,
        message: InclusionMessage::OneOf,
    }));
    assert!(empty_set.check().is_err());
}

#[test]
fn test_registry_json_round_trip() {
    let registry = SchemaRegistry::default();
    let json = serde_json::to_string(&registry).expect("serialize");
    let parsed = SchemaRegistry::from_json_str(&json).expect("parse");
    assert_eq!(parsed, registry);
}

#[test]
fn test_minimal_schema_json_uses_defaults() {
    let registry = SchemaRegistry::from_json_str(
        r#"[{"name": "coupon", "display_name": "Coupon", "required": [{"field": "duration"}]}]"#,
    )
    .expect("parse");
    let coupon = registry.get("coupon").expect("coupon");
    assert_eq!(coupon.required[0].message, MissingMessage::Generic);
    assert!(coupon.references.is_empty());
    assert!(coupon.defaults.is_empty());
}

#[test]
fn test_load_missing_file() {
    let err = SchemaRegistry::load("/nonexistent/mockpay/schemas.json").expect_err("missing file");
    assert!(matches!(err, SetupError::FileSystem { .. }));
}

#[test]
fn test_may_unset() {
    let plan = defaults::plan();
    assert!(plan.may_unset("nickname"));
    assert!(!plan.may_unset("amount"));
    assert!(!plan.may_unset("metadata"));
}

#[test]
fn test_integer_in_sets_both_bounds() {
    let schema = Schema::new("coupon", "Coupon").integer_in("percent_off", 0..=100);
    assert_eq!(schema.integers[0].minimum, Some(0));
    assert_eq!(schema.integers[0].maximum, Some(100));
}
