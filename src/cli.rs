//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::file_reader::{InputConfig, DEFAULT_MAX_INPUT_BYTES};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::find::FindMode;
use crate::flows::FlowOptions;

/// combosum - find every combination of items that adds up to an amount.
#[derive(Parser, Debug)]
#[command(name = "combosum")]
#[command(
    author,
    version,
    about,
    long_about = r#"combosum reads a list of `name,value` lines and reports every distinct
combination of items whose values add up to a target amount, or fall within a
range.

Input lines without a comma, or whose value is not an integer, are skipped.
Only the first two comma-separated fields are used. Repeated (name, value)
pairs are loaded once.

Output formats:
- csv: spreadsheet-ready CSV (default; UTF-8 BOM, CRLF)
- jsonl: one JSON object per combination
- json: a single JSON document with the search and all combinations
- md: human-friendly Markdown table

Examples:
    combosum exact prices.csv --target 30
    combosum within prices.csv --low 25 --high 30 -o combo_results.csv
    combosum items prices.csv --format md
"#
)]
pub struct Cli {
    /// Output format (csv/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "csv",
        env = "COMBOSUM_FORMAT",
        value_name = "FORMAT",
        value_parser = ["csv", "jsonl", "json", "md", "markdown"],
        long_help = "Select the output format.\n\n\
Supported values:\n\
- csv (default)\n\
- jsonl\n\
- json\n\
- md (markdown)\n\n\
Tip: csv matches the layout spreadsheet tools expect; prefer jsonl for piping."
    )]
    pub format: String,

    /// Write output to a file instead of stdout.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on csv/md formats."
    )]
    pub pretty: bool,

    /// Refuse inputs larger than this many bytes.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_INPUT_BYTES,
        env = "COMBOSUM_MAX_INPUT_BYTES",
        value_name = "BYTES"
    )]
    pub max_input_bytes: u64,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output on stderr. This is useful when piping or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no summary, errors only).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr: skipped lines, duplicate counts and\n\
search statistics. RUST_LOG overrides this when set."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find combinations that sum to exactly a target.
    #[command(
        long_about = "Find every combination of items whose values sum to exactly TARGET.\n\
Each item is used at most once. Item values must be non-negative.\n\n\
Examples:\n\
  combosum exact prices.csv --target 30\n\
  cat prices.csv | combosum exact - --target 30 --format jsonl\n"
    )]
    Exact {
        /// Items file (`-` for stdin).
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Target amount.
        #[arg(long, short, value_name = "AMOUNT", allow_hyphen_values = true)]
        target: Option<String>,
    },

    /// Find combinations whose sum falls within a range.
    #[command(
        long_about = "Find every combination of items whose values sum to at least LOW and at\n\
most HIGH (both inclusive). When the range contains 0, the empty combination is\n\
reported too. A LOW above HIGH matches nothing.\n\n\
Examples:\n\
  combosum within prices.csv --low 25 --high 30\n"
    )]
    Within {
        /// Items file (`-` for stdin).
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Lower limit (inclusive).
        #[arg(long, short, value_name = "AMOUNT", allow_hyphen_values = true)]
        low: Option<String>,

        /// Upper limit (inclusive).
        #[arg(long = "high", short = 'H', value_name = "AMOUNT", allow_hyphen_values = true)]
        high: Option<String>,
    },

    /// Show the normalized item list.
    #[command(
        long_about = "Load INPUT, apply the same parsing and de-duplication as the search\n\
commands, and print the resulting item list in name order.\n\n\
Example:\n\
  combosum items prices.csv --format md\n"
    )]
    Items {
        /// Items file (`-` for stdin).
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let options = FlowOptions {
        input: InputConfig {
            max_bytes: cli.max_input_bytes,
        },
        render: RenderConfig::with_pretty(format, cli.pretty),
        output: cli.output,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Exact { input, target } => crate::flows::find::run_find(
            &input,
            FindMode::Exact {
                target: target.as_deref(),
            },
            &options,
        ),

        Commands::Within { input, low, high } => crate::flows::find::run_find(
            &input,
            FindMode::Within {
                low: low.as_deref(),
                high: high.as_deref(),
            },
            &options,
        ),

        Commands::Items { input } => crate::flows::items::run_items(&input, &options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_exact() {
        let cli = Cli::try_parse_from(["combosum", "exact", "items.csv", "--target", "30"]).unwrap();
        match cli.command {
            Commands::Exact { input, target } => {
                assert_eq!(input, PathBuf::from("items.csv"));
                assert_eq!(target.as_deref(), Some("30"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, "csv");
    }

    #[test]
    fn test_parse_within_negative_low() {
        let cli = Cli::try_parse_from([
            "combosum", "within", "-", "--low", "-5", "--high", "10", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Within { low, high, .. } => {
                assert_eq!(low.as_deref(), Some("-5"));
                assert_eq!(high.as_deref(), Some("10"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["combosum", "--format", "xlsx", "items", "a.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["combosum", "-q", "-v", "items", "a.csv"]);
        assert!(result.is_err());
    }
}
