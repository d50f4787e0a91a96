//! Script execution and output formatting for the mockpay CLI.

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use mockpay_core::{Deleted, FakeApi, List, Operation, Plan, Product, RequestError};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::args::{OutputFormat, RunArgs};
use crate::renderer::TerminalRenderer;

/// The explicit schema file, or the user's XDG config one if it exists.
pub fn resolve_schema_file(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        xdg::BaseDirectories::with_prefix("mockpay").find_config_file("schemas.json")
    })
}

/// Executes CLI commands against one fake API instance.
pub struct Cli {
    api: FakeApi,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(api: FakeApi, renderer: TerminalRenderer) -> Self {
        Self { api, renderer }
    }

    /// Runs every operation of the script in order and prints each outcome.
    pub fn run_script(&self, args: &RunArgs) -> Result<()> {
        let script = fs::read_to_string(&args.script)
            .with_context(|| format!("Failed to read script {}", args.script.display()))?;
        let operations: Vec<Operation> = serde_json::from_str(&script)
            .with_context(|| format!("Invalid script {}", args.script.display()))?;

        debug!("running {} operations", operations.len());
        let mut failures = 0;

        for (index, operation) in operations.iter().enumerate() {
            match self.api.dispatch(operation) {
                Ok(body) => self.print_success(operation, body, args.format)?,
                Err(e) => {
                    failures += 1;
                    warn!("operation {} ({operation}) failed: {e}", index + 1);
                    self.print_failure(operation, &e, args.format);
                    if args.stop_on_error {
                        bail!("Operation {} ({operation}) failed: {e}", index + 1);
                    }
                }
            }
        }

        debug!("{failures} of {} operations failed", operations.len());
        Ok(())
    }

    pub fn print_schema(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.api.registry())
            .context("Failed to serialize schema registry")?;
        println!("{json}");
        Ok(())
    }

    fn print_success(
        &self,
        operation: &Operation,
        body: Value,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => {
                println!("{}", json!({"http_status": 200, "body": body}));
            }
            OutputFormat::Text => {
                let markdown = to_markdown(operation, body)?;
                self.renderer.render_record(&markdown);
            }
        }
        Ok(())
    }

    fn print_failure(&self, operation: &Operation, error: &RequestError, format: OutputFormat) {
        match format {
            OutputFormat::Json => {
                let mut envelope = error.to_body();
                if let Value::Object(map) = &mut envelope {
                    map.insert("http_status".to_string(), json!(error.http_status()));
                }
                println!("{envelope}");
            }
            OutputFormat::Text => {
                self.renderer.render_failure(&format!(
                    "**{} {}** `{operation}`: {} (param: `{}`)",
                    error.http_status(),
                    error.error_type(),
                    error.message(),
                    error.param()
                ));
            }
        }
    }
}

/// Markdown for a successful response, typed where the resource is known.
fn to_markdown(operation: &Operation, body: Value) -> Result<String> {
    match (operation, operation.resource()) {
        (Operation::Delete { .. }, _) => typed::<Deleted>(body),
        (Operation::List { .. }, "plan") => typed::<List<Plan>>(body),
        (Operation::List { .. }, "product") => typed::<List<Product>>(body),
        (Operation::List { .. }, _) => Ok(code_block(&body)),
        (_, "plan") => typed::<Plan>(body),
        (_, "product") => typed::<Product>(body),
        _ => Ok(code_block(&body)),
    }
}

fn typed<T: DeserializeOwned + Display>(body: Value) -> Result<String> {
    let value: T = serde_json::from_value(body).context("Unexpected response shape")?;
    Ok(format!("{value}\n"))
}

fn code_block(body: &Value) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    format!("```json\n{pretty}\n```\n")
}
