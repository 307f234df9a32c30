//! Find flow - Search for combinations and emit the report

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::{emit, load_items, FlowOptions};
use crate::core::error::ValidationError;
use crate::core::model::{ItemSet, Report, SearchSpec};
use crate::core::render::Renderer;
use crate::report::format_report;
use crate::search::{check_items, exact_request, run_search, within_request};

/// Search mode selected on the command line, with raw parameters
#[derive(Debug, Clone, Copy)]
pub enum FindMode<'a> {
    Exact {
        target: Option<&'a str>,
    },
    Within {
        low: Option<&'a str>,
        high: Option<&'a str>,
    },
}

impl FindMode<'_> {
    fn to_spec(self) -> Result<SearchSpec, ValidationError> {
        match self {
            FindMode::Exact { target } => exact_request(target),
            FindMode::Within { low, high } => within_request(low, high),
        }
    }
}

/// Validate, search and build the report for an already loaded item set
pub fn find_combinations(items: &ItemSet, mode: FindMode<'_>) -> Result<Report, ValidationError> {
    check_items(items)?;
    let spec = mode.to_spec()?;

    let combos = run_search(items, spec);
    Ok(format_report(&combos).with_search(spec))
}

/// Run the find flow: load, search, render, write
pub fn run_find(input: &Path, mode: FindMode<'_>, options: &FlowOptions) -> Result<()> {
    let items = load_items(input, options)?;
    let report = find_combinations(&items, mode).inspect_err(|e| {
        tracing::debug!(code = e.code(), "search request rejected");
    })?;

    if let Some(search) = &report.search {
        tracing::info!(search = %search, entries = report.len(), "search finished");
    }
    if !options.quiet {
        let summary = format!("Found {} combinations", report.len());
        if report.is_empty() {
            eprintln!("{} {}", "!".yellow(), summary.yellow());
        } else {
            eprintln!("{} {}", "✓".green(), summary);
        }
    }

    let rendered = Renderer::with_config(options.render).render_report(&report);
    emit(&rendered, options)
}
