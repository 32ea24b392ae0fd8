//! Golden Fixtures CLI Binary
//!
//! Command-line interface for comparing and updating golden fixture directories.

use anyhow::Context;
use clap::Parser;
use golden_fixtures::tooling::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let context = CliContext::new(cli.root.clone())
        .with_context(|| format!("failed to load settings from {}", cli.root.display()))?;
    context
        .init_logging(cli.log_level.clone(), cli.log_format.clone())
        .context("failed to initialize logging")?;

    let output = context.execute(&cli.command)?;
    println!("{}", output.text);
    Ok(output.success)
}
