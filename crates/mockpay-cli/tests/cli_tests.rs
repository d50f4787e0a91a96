use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper function to write a script into a fresh temporary directory
fn write_script(script: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("script.json");
    fs::write(&path, script.to_string()).expect("Failed to write script");
    (temp_dir, path)
}

/// Helper function to create a Command with --no-color and an isolated config dir
fn mockpay_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mockpay").expect("Failed to find mockpay binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.arg("--no-color");
    cmd
}

fn plan_script() -> Value {
    json!([
        {"method": "create", "resource": "product", "params": {"id": "prod_1", "name": "Gold"}},
        {"method": "create", "resource": "plan", "params": {
            "product": "prod_1",
            "amount": 9900,
            "currency": "usd",
            "interval": "month"
        }},
        {"method": "retrieve", "resource": "plan", "id": "test_plan_1"},
    ])
}

#[test]
fn test_cli_run_prints_json_responses() {
    let (temp_dir, script) = write_script(&plan_script());

    let output = mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap()])
        .output()
        .expect("Failed to run mockpay");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("one JSON document per line"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["http_status"], 200);
    assert_eq!(lines[1]["body"]["id"], "test_plan_1");
    assert_eq!(lines[2]["body"]["amount"], 9900);
}

#[test]
fn test_cli_run_reports_errors_and_continues() {
    let (temp_dir, script) = write_script(&json!([
        {"method": "retrieve", "resource": "plan", "id": "nope"},
        {"method": "list", "resource": "plan"},
    ]));

    mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""http_status":404"#))
        .stdout(predicate::str::contains("No such plan: nope"))
        .stdout(predicate::str::contains(r#""object":"list""#));
}

#[test]
fn test_cli_run_stop_on_error() {
    let (temp_dir, script) = write_script(&json!([
        {"method": "create", "resource": "plan", "params": {"amount": 99.99}},
        {"method": "list", "resource": "plan"},
    ]));

    mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap(), "--stop-on-error"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid_request_error"))
        .stdout(predicate::str::contains(r#""object":"list""#).not())
        .stderr(predicate::str::contains("Operation 1 (create plan) failed"));
}

#[test]
fn test_cli_run_text_format() {
    let (temp_dir, script) = write_script(&plan_script());

    mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gold (prod_1)"))
        .stdout(predicate::str::contains("- Amount: 9900 usd per month"));
}

#[test]
fn test_cli_run_text_format_error() {
    let (temp_dir, script) = write_script(&json!([
        {"method": "create", "resource": "product", "params": {}},
    ]));

    mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("400 invalid_request_error"))
        .stdout(predicate::str::contains("Missing required param: name."));
}

#[test]
fn test_cli_run_missing_script() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let missing = temp_dir.path().join("absent.json");

    mockpay_cmd(&temp_dir)
        .args(["run", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn test_cli_run_malformed_script() {
    let (temp_dir, script) = write_script(&json!({"method": "list"}));

    mockpay_cmd(&temp_dir)
        .args(["run", script.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script"));
}

#[test]
fn test_cli_schema_prints_default_registry() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    mockpay_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "plan""#))
        .stdout(predicate::str::contains(r#""name": "product""#));
}

#[test]
fn test_cli_schema_file_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let schema_file = temp_dir.path().join("custom.json");
    let registry = json!([{
        "name": "coupon",
        "display_name": "Coupon",
        "required": [{"field": "duration"}]
    }]);
    fs::write(&schema_file, registry.to_string()).expect("Failed to write schema file");

    mockpay_cmd(&temp_dir)
        .args(["--schema-file", schema_file.to_str().unwrap(), "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "coupon""#))
        .stdout(predicate::str::contains(r#""name": "plan""#).not());
}

#[test]
fn test_cli_schema_from_xdg_config() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join("mockpay");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let registry = json!([{"name": "invoice", "display_name": "Invoice"}]);
    fs::write(config_dir.join("schemas.json"), registry.to_string())
        .expect("Failed to write schema file");

    mockpay_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "invoice""#));
}

#[test]
fn test_cli_invalid_schema_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let schema_file = temp_dir.path().join("broken.json");
    fs::write(&schema_file, "[{\"name\": \"plan\"").expect("Failed to write schema file");

    mockpay_cmd(&temp_dir)
        .args(["--schema-file", schema_file.to_str().unwrap(), "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize fake API"));
}
