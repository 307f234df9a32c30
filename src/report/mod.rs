//! Report module - Deduplicate search results and serialize them
//!
//! Provides:
//! - build: canonical ordering, deduplication, totals
//! - export: the spreadsheet-compatible CSV layout

pub mod build;
pub mod export;

pub use build::format_report;
