//! Mockpay CLI Application
//!
//! Runs request scripts against the in-memory fake payment API.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mockpay_core::FakeApiBuilder;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        schema_file,
        no_color,
        command,
    } = Args::parse();

    let schema_file = cli::resolve_schema_file(schema_file);
    let api = FakeApiBuilder::new()
        .with_schema_file(schema_file.as_ref())
        .build()
        .context("Failed to initialize fake API")?;

    info!(
        "mockpay started with resources: {}",
        api.registry().names().collect::<Vec<_>>().join(", ")
    );

    let cli = Cli::new(api, TerminalRenderer::new(!no_color));
    match command {
        Commands::Run(args) => cli.run_script(&args),
        Commands::Schema => cli.print_schema(),
    }
}
