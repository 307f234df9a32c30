//! Spreadsheet export
//!
//! The CSV layout is fixed for compatibility with spreadsheet tools:
//! a UTF-8 BOM, CRLF between rows, no trailing line break, and a placeholder
//! row when nothing matched.

use crate::core::model::{ItemSet, Report};

pub const BOM: char = '\u{feff}';
pub const CRLF: &str = "\r\n";
pub const REPORT_HEADER: &str = "Items,Total Price";
pub const EMPTY_REPORT_ROW: &str = "No combinations found.,";
pub const ITEMS_HEADER: &str = "Name,Value";

fn with_bom(lines: &[String]) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join(CRLF));
    out
}

/// Serialize a report as `Items,Total Price` CSV
pub fn report_to_csv(report: &Report) -> String {
    let mut lines = vec![REPORT_HEADER.to_string()];
    lines.extend(
        report
            .entries
            .iter()
            .map(|entry| format!("{},{}", entry.names, entry.total)),
    );

    if report.is_empty() {
        lines.push(EMPTY_REPORT_ROW.to_string());
    }

    with_bom(&lines)
}

/// Serialize a normalized item set as `Name,Value` CSV
pub fn items_to_csv(items: &ItemSet) -> String {
    let mut lines = vec![ITEMS_HEADER.to_string()];
    lines.extend(items.iter().map(|i| format!("{},{}", i.name, i.value)));
    with_bom(&lines)
}
