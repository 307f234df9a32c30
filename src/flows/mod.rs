//! Flows module - End-to-end commands combining input, search and output
//!
//! Provides:
//! - find: load items, run an exact or within search, emit the report
//! - items: load items and emit the normalized set

pub mod find;
pub mod items;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::core::file_reader::{read_input, InputConfig};
use crate::core::model::ItemSet;
use crate::core::render::{RenderConfig, Renderer};
use crate::items::normalize_text;

/// Options shared by every flow
#[derive(Debug, Clone, Default)]
pub struct FlowOptions {
    pub input: InputConfig,
    pub render: RenderConfig,

    /// Write output here instead of stdout
    pub output: Option<PathBuf>,

    /// Suppress the stderr summary
    pub quiet: bool,
}

/// Read and normalize the items at `path`
pub fn load_items(path: &Path, options: &FlowOptions) -> Result<ItemSet> {
    let input = read_input(path, &options.input)?;
    let (items, stats) = normalize_text(&input.content);
    if input.lossy_conversion {
        tracing::warn!(source = %input.source, "input contains invalid UTF-8, using lossy conversion");
    }

    tracing::info!(
        source = %input.source,
        lines = stats.lines,
        items = items.len(),
        skipped = stats.skipped,
        duplicates = stats.duplicates,
        "items loaded"
    );
    if !options.quiet {
        eprintln!(
            "{} Loaded {} items from {}",
            "✓".green(),
            items.len(),
            input.source
        );
    }

    Ok(items)
}

/// Write rendered output to the configured destination
pub fn emit(rendered: &str, options: &FlowOptions) -> Result<()> {
    let renderer = Renderer::with_config(options.render);

    match &options.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            renderer
                .write_to(rendered, std::io::BufWriter::new(file))
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            if !options.quiet {
                eprintln!("{} Wrote {}", "✓".green(), path.display());
            }
        }
        None => {
            let stdout = std::io::stdout();
            renderer
                .write_to(rendered, stdout.lock())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
