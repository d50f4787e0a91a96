//! Tests for model decoding and display.

use std::collections::BTreeMap;

use serde_json::json;

use crate::models::{record::decode, Deleted, Interval, List, Plan, Product, Record};

fn create_test_plan() -> Plan {
    Plan {
        id: "plan_1".to_string(),
        object: "plan".to_string(),
        product: "prod_abc123".to_string(),
        nickname: None,
        name: Some("The Mock Plan".to_string()),
        amount: 9900,
        currency: "USD".to_string(),
        interval: Interval::Month,
        interval_count: 1,
        active: true,
        metadata: BTreeMap::from([
            ("description".to_string(), "desc text".to_string()),
            ("info".to_string(), "info text".to_string()),
        ]),
        trial_period_days: Some(30),
        created: 1640995200, // 2022-01-01 00:00:00 UTC
        livemode: false,
    }
}

fn create_test_product() -> Product {
    Product {
        id: "prod_abc123".to_string(),
        object: "product".to_string(),
        name: "My Product".to_string(),
        active: true,
        description: Some("Sold monthly".to_string()),
        metadata: BTreeMap::new(),
        created: 1640995200,
        livemode: false,
    }
}

#[test]
fn test_interval_parsing() {
    assert_eq!("week".parse::<Interval>(), Ok(Interval::Week));
    assert_eq!(Interval::Year.as_str(), "year");
    assert!("Month".parse::<Interval>().is_err());
    assert!("fortnight".parse::<Interval>().is_err());
}

#[test]
fn test_plan_display() {
    let output = create_test_plan().to_string();

    assert!(output.contains("# The Mock Plan (plan_1)"));
    assert!(output.contains("- Amount: 9900 USD per month"));
    assert!(output.contains("- Product: prod_abc123"));
    assert!(output.contains("- Trial: 30 days"));
    assert!(output.contains("- Created: 2022-01-01 00:00:00 UTC"));
    assert!(output.contains("## Metadata"));
    assert!(output.contains("- description: desc text"));
}

#[test]
fn test_plan_display_prefers_nickname_and_counts_intervals() {
    let mut plan = create_test_plan();
    plan.nickname = Some("Gold".to_string());
    plan.interval_count = 3;
    plan.metadata.clear();
    plan.trial_period_days = None;
    let output = plan.to_string();

    assert!(output.starts_with("# Gold (plan_1)"));
    assert!(output.contains("per 3 months"));
    assert!(!output.contains("Trial"));
    assert!(!output.contains("## Metadata"));
}

#[test]
fn test_product_display() {
    let output = create_test_product().to_string();
    assert!(output.contains("# My Product (prod_abc123)"));
    assert!(output.contains("Sold monthly"));
}

#[test]
fn test_deleted_display() {
    let deleted = Deleted::new("plan", "plan_1");
    assert!(deleted.deleted);
    assert_eq!(deleted.to_string(), "Deleted plan with ID: plan_1\n");
}

#[test]
fn test_list_display() {
    let empty: List<Product> = List::new("product", Vec::new(), false);
    assert_eq!(empty.to_string(), "No products found.\n");

    let page = List::new("product", vec![create_test_product()], true);
    let output = page.to_string();
    assert!(output.contains("# My Product"));
    assert!(output.contains("More records available"));
}

#[test]
fn test_decode_plan_record() {
    let record: Record = json!({
        "id": "plan_1",
        "object": "plan",
        "product": "prod_1",
        "amount": 9900,
        "currency": "usd",
        "interval": "month",
        "created": 1640995200,
        "livemode": false
    })
    .as_object()
    .cloned()
    .expect("object");

    let plan: Plan = decode("plan", record).expect("decodes");
    assert_eq!(plan.amount, 9900);
    assert_eq!(plan.interval, Interval::Month);
    assert_eq!(plan.interval_count, 1);
    assert!(plan.metadata.is_empty());
}

#[test]
fn test_decode_failure_is_invalid_request() {
    let mut record = Record::new();
    record.insert("id".to_string(), json!("plan_1"));

    let err = decode::<Plan>("plan", record).expect_err("missing fields");
    assert_eq!(err.param(), "plan");
    assert!(err.message().starts_with("Invalid plan record"));
}
