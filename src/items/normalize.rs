//! Item normalization
//!
//! Parses raw lines of the form:
//! name,value[,anything else]

use std::collections::HashSet;

use crate::core::collate::compare_names;
use crate::core::model::{Item, ItemSet};
use crate::core::util::{parse_leading_int, split_lines, strip_bom, trim_field};

/// Counters collected while normalizing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Lines examined
    pub lines: usize,

    /// Lines without a separator or with an unparsable value
    pub skipped: usize,

    /// Lines dropped as exact (name, value) repeats
    pub duplicates: usize,
}

/// Parse a single raw line into an item.
///
/// Only the first two comma-separated fields are used.
fn parse_line(line: &str) -> Option<Item> {
    let mut fields = line.splitn(3, ',');
    let name = fields.next()?;
    let value = fields.next()?;

    let value = parse_leading_int(value)?;
    Some(Item::new(trim_field(name), value))
}

/// Normalize raw lines into an ItemSet
pub fn normalize<'a, I>(lines: I) -> (ItemSet, NormalizeStats)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = NormalizeStats::default();
    let mut seen: HashSet<(String, i64)> = HashSet::new();
    let mut items = Vec::new();

    for line in lines {
        stats.lines += 1;

        let Some(item) = parse_line(line) else {
            stats.skipped += 1;
            continue;
        };

        if !seen.insert((item.name.clone(), item.value)) {
            stats.duplicates += 1;
            continue;
        }

        items.push(item);
    }

    // sort_by is stable: equal names keep input order
    items.sort_by(|a, b| compare_names(&a.name, &b.name));

    tracing::debug!(
        lines = stats.lines,
        skipped = stats.skipped,
        duplicates = stats.duplicates,
        items = items.len(),
        "normalized items"
    );

    (ItemSet::from_sorted(items), stats)
}

/// Normalize a whole text blob (LF or CRLF line endings, optional BOM)
pub fn normalize_text(text: &str) -> (ItemSet, NormalizeStats) {
    normalize(split_lines(strip_bom(text)))
}
