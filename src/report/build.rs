//! Report building
//!
//! Canonicalizes combinations, drops repeats, and computes totals.

use std::collections::HashSet;

use crate::core::collate::compare_names;
use crate::core::model::{Combination, Item, Report, ReportEntry};
use crate::core::util::hash_bytes;

/// Separator between names in a report entry
pub const NAME_SEPARATOR: &str = "; ";

/// Sort a combination's items by name (stable)
pub fn canonicalize(combo: &Combination) -> Vec<Item> {
    let mut items = combo.items.clone();
    items.sort_by(|a, b| compare_names(&a.name, &b.name));
    items
}

/// Identity of a canonical combination: its (name, value) sequence
fn dedup_key(items: &[Item]) -> String {
    // Names never contain ',' since the normalizer splits on it; '|' and '\n'
    // keep the pair boundaries unambiguous even for hand-built items.
    items
        .iter()
        .map(|i| format!("{}|{}", i.name, i.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a report from combinations in discovery order.
///
/// The first combination with a given canonical form wins; later ones are
/// discarded.
pub fn format_report(combos: &[Combination]) -> Report {
    let mut seen: HashSet<String> = HashSet::new();
    let mut report = Report::new();

    for combo in combos {
        let items = canonicalize(combo);
        let key = dedup_key(&items);
        if seen.contains(&key) {
            continue;
        }

        let names = items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR);
        let total = combo.total();
        let fingerprint = hash_bytes(key.as_bytes());

        seen.insert(key);
        report.push(ReportEntry {
            names,
            total,
            items,
            fingerprint,
        });
    }

    tracing::debug!(
        combinations = combos.len(),
        entries = report.len(),
        "report built"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn combo(pairs: &[(&str, i64)]) -> Combination {
        Combination::new(pairs.iter().map(|&(n, v)| Item::new(n, v)).collect())
    }

    fn rows(report: &Report) -> Vec<(&str, i64)> {
        report
            .entries
            .iter()
            .map(|e| (e.names.as_str(), e.total))
            .collect()
    }

    #[test]
    fn test_exact_example() {
        let report = format_report(&[combo(&[("A", 10), ("B", 20)]), combo(&[("C", 30)])]);
        assert_eq!(rows(&report), vec![("A; B", 30), ("C", 30)]);
    }

    #[test]
    fn test_permutations_collapse() {
        let report = format_report(&[
            combo(&[("B", 2), ("A", 1)]),
            combo(&[("A", 1), ("B", 2)]),
        ]);
        assert_eq!(rows(&report), vec![("A; B", 3)]);
        assert_eq!(report.entries[0].items[0].name, "A");
    }

    #[test]
    fn test_same_names_different_values_are_distinct() {
        let report = format_report(&[combo(&[("A", 10)]), combo(&[("A", 20)])]);
        assert_eq!(rows(&report), vec![("A", 10), ("A", 20)]);
        assert_ne!(report.entries[0].fingerprint, report.entries[1].fingerprint);
    }

    #[test]
    fn test_first_occurrence_order_kept() {
        let report = format_report(&[
            combo(&[("C", 3)]),
            combo(&[("A", 1)]),
            combo(&[("C", 3)]),
            combo(&[("B", 2)]),
        ]);
        assert_eq!(rows(&report), vec![("C", 3), ("A", 1), ("B", 2)]);
    }

    #[test]
    fn test_empty_combination_entry() {
        let report = format_report(&[Combination::default(), combo(&[("X", 5)])]);
        assert_eq!(rows(&report), vec![("", 0), ("X", 5)]);
    }

    #[test]
    fn test_total_saturates() {
        let report = format_report(&[combo(&[("Big", i64::MAX), ("One", 1)])]);
        assert_eq!(rows(&report), vec![("Big; One", i64::MAX)]);
    }

    #[test]
    fn test_accented_names_ordered_within_entry() {
        let report = format_report(&[combo(&[("Zucchini", 1), ("Éclair", 2), ("Fudge", 3)])]);
        assert_eq!(rows(&report), vec![("Éclair; Fudge; Zucchini", 6)]);
    }

    #[test]
    fn test_no_combinations() {
        let report = format_report(&[]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_canonicalize_stable_for_equal_names() {
        let items = canonicalize(&combo(&[("B", 1), ("A", 20), ("A", 10)]));
        let pairs: Vec<_> = items.iter().map(|i| (i.name.as_str(), i.value)).collect();
        assert_eq!(pairs, vec![("A", 20), ("A", 10), ("B", 1)]);
    }

    proptest! {
        #[test]
        fn prop_idempotent_and_consistent(
            raw in prop::collection::vec(
                prop::collection::vec(("[a-d]", 0i64..10), 0..4),
                0..12
            )
        ) {
            let combos: Vec<Combination> = raw
                .iter()
                .map(|c| Combination::new(c.iter().map(|(n, v)| Item::new(n.clone(), *v)).collect()))
                .collect();

            let first = format_report(&combos);
            let second = format_report(&combos);
            prop_assert_eq!(&first, &second);

            let mut keys = HashSet::new();
            for entry in &first.entries {
                let sum: i64 = entry.items.iter().map(|i| i.value).sum();
                prop_assert_eq!(entry.total, sum);
                prop_assert!(keys.insert(dedup_key(&entry.items)));
            }
        }
    }
}
