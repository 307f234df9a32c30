//! Renderer module
//!
//! Renders reports and item sets to different output formats: csv, jsonl,
//! json, md

use crate::core::model::{ItemSet, Report};
use crate::report::export::{items_to_csv, report_to_csv};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports and item sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render_report(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Csv => report_to_csv(report),
            OutputFormat::Jsonl => self.render_jsonl(&report.entries),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_report_markdown(report),
        }
    }

    /// Render a normalized item set to a string
    pub fn render_items(&self, items: &ItemSet) -> String {
        match self.config.format {
            OutputFormat::Csv => items_to_csv(items),
            OutputFormat::Jsonl => self.render_jsonl(items.as_slice()),
            OutputFormat::Json => self.render_json(items),
            OutputFormat::Markdown => self.render_items_markdown(items),
        }
    }

    /// Write rendered output followed by a newline (none for CSV)
    pub fn write_to<W: Write>(&self, output: &str, mut writer: W) -> std::io::Result<()> {
        writer.write_all(output.as_bytes())?;
        if self.config.format != OutputFormat::Csv && !output.is_empty() {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl<T: serde::Serialize>(&self, rows: &[T]) -> String {
        rows.iter()
            .filter_map(|row| {
                if self.config.pretty {
                    serde_json::to_string_pretty(row).ok()
                } else {
                    serde_json::to_string(row).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON document
    fn render_json<T: serde::Serialize>(&self, value: &T) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render a report as a Markdown table
    fn render_report_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str("## Combinations");
        if let Some(search) = &report.search {
            output.push_str(&format!(" ({})", search));
        }
        output.push_str("\n\n");

        if report.is_empty() {
            output.push_str("_No combinations found._\n");
            return output;
        }

        output.push_str("| # | Items | Total |\n");
        output.push_str("|---|-------|------:|\n");
        for (idx, entry) in report.entries.iter().enumerate() {
            let names = if entry.names.is_empty() {
                "_(none)_".to_string()
            } else {
                escape_md_cell(&entry.names)
            };
            output.push_str(&format!("| {} | {} | {} |\n", idx + 1, names, entry.total));
        }

        output
    }

    /// Render items as a Markdown table
    fn render_items_markdown(&self, items: &ItemSet) -> String {
        let mut output = String::from("## Items\n\n");

        if items.is_empty() {
            output.push_str("_No items._\n");
            return output;
        }

        output.push_str("| Name | Value |\n");
        output.push_str("|------|------:|\n");
        for item in items {
            output.push_str(&format!(
                "| {} | {} |\n",
                escape_md_cell(&item.name),
                item.value
            ));
        }

        output
    }
}

fn escape_md_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
