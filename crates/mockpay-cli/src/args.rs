use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Command-line driver for the mockpay fake payment API
///
/// Runs scripted requests against a fresh in-memory fake and prints each
/// response, so request sequences can be checked without the remote
/// service.
#[derive(Parser)]
#[command(version, about, name = "mockpay")]
pub struct Args {
    /// Path to a JSON schema registry. Defaults to
    /// $XDG_CONFIG_HOME/mockpay/schemas.json when present, otherwise the
    /// built-in plan and product schemas
    #[arg(long, global = true)]
    pub schema_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the mockpay CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Execute a JSON script of operations in order
    Run(RunArgs),
    /// Print the active schema registry as JSON
    Schema,
}

/// Execute a script of operations
///
/// The script is a JSON array such as
/// `[{"method": "create", "resource": "product", "params": {"name": "Gold"}}]`.
#[derive(ClapArgs)]
pub struct RunArgs {
    #[arg(help = "Path to the JSON script")]
    pub script: PathBuf,
    #[arg(long, help = "Abort with a non-zero exit on the first failed operation")]
    pub stop_on_error: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, help = "Output format")]
    pub format: OutputFormat,
}

/// How responses are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line
    Json,
    /// Markdown rendered for the terminal
    Text,
}
