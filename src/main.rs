//! combosum - find every combination of items that adds up to an amount
//!
//! combosum provides:
//! - Permissive `name,value` input parsing with de-duplication
//! - Exact-sum and range-sum combination search
//! - Deduplicated, deterministically ordered reports
//! - Output as spreadsheet CSV, jsonl, json or Markdown

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod core;
mod flows;
mod items;
mod report;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(&cli);

    cli::run(cli)
}

fn init_tracing(cli: &cli::Cli) {
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "combosum=debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color)
                .with_target(false),
        )
        .init();
}
