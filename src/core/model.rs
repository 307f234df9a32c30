//! Item and Report Model
//!
//! Every command maps its output onto these types before rendering. Items are
//! loaded once and stay read-only; combinations are copied out of the search
//! path only when they match.

use serde::{Deserialize, Serialize};

/// A named, integer-valued item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub value: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Normalized items: unique (name, value) pairs ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Wrap items that are already deduplicated and sorted.
    ///
    /// Only the normalizer builds sets from raw input; tests use this to
    /// construct fixtures directly.
    pub fn from_sorted(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Items in the order the search selected them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    pub items: Vec<Item>,
}

impl Combination {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Sum of item values, saturating at the i64 bounds
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.value))
    }
}

/// The search that produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchSpec {
    Exact { target: i64 },
    Within { low: i64, high: i64 },
}

impl std::fmt::Display for SearchSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchSpec::Exact { target } => write!(f, "exact {}", target),
            SearchSpec::Within { low, high } => write!(f, "within {}..={}", low, high),
        }
    }
}

/// One deduplicated combination in canonical (name-sorted) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Item names joined with "; "
    pub names: String,

    pub total: i64,

    pub items: Vec<Item>,

    /// xxh3 of the canonical (name, value) key, hex
    pub fingerprint: String,
}

/// Ordered, deduplicated search output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchSpec>,

    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: SearchSpec) -> Self {
        self.search = Some(search);
        self
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_equality_uses_both_fields() {
        assert_eq!(Item::new("A", 10), Item::new("A", 10));
        assert_ne!(Item::new("A", 10), Item::new("A", 20));
        assert_ne!(Item::new("A", 10), Item::new("B", 10));
    }

    #[test]
    fn test_combination_total() {
        let combo = Combination::new(vec![Item::new("A", 10), Item::new("B", 20)]);
        assert_eq!(combo.total(), 30);
        assert_eq!(Combination::default().total(), 0);
    }

    #[test]
    fn test_combination_total_saturates() {
        let combo = Combination::new(vec![Item::new("A", i64::MAX), Item::new("B", 1)]);
        assert_eq!(combo.total(), i64::MAX);
    }

    #[test]
    fn test_search_spec_serialization() {
        let json = serde_json::to_value(SearchSpec::Within { low: 1, high: 5 }).unwrap();
        assert_eq!(json["mode"], "within");
        assert_eq!(json["low"], 1);
        assert_eq!(json["high"], 5);

        let json = serde_json::to_value(SearchSpec::Exact { target: 30 }).unwrap();
        assert_eq!(json["mode"], "exact");
        assert_eq!(json["target"], 30);
    }

    #[test]
    fn test_search_spec_display() {
        assert_eq!(SearchSpec::Exact { target: 3 }.to_string(), "exact 3");
        assert_eq!(
            SearchSpec::Within { low: 1, high: 2 }.to_string(),
            "within 1..=2"
        );
    }

    #[test]
    fn test_item_set_serializes_as_array() {
        let set = ItemSet::from_sorted(vec![Item::new("A", 1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"name":"A","value":1}]"#);
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new().with_search(SearchSpec::Exact { target: 1 });
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }
}
