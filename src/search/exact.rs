//! Exact-sum combination search
//!
//! Depth-first backtracking over the item set in order. Each item is used at
//! most once, a branch is cut as soon as it would overshoot the target, and a
//! path is recorded the moment its sum hits the target.
//!
//! Item values must be non-negative; the overshoot cut is unsound otherwise.

use crate::core::model::{Combination, Item, ItemSet};

struct ExactSearch<'a> {
    items: &'a [Item],
    target: i64,
    path: Vec<usize>,
    found: Vec<Combination>,
}

impl ExactSearch<'_> {
    fn backtrack(&mut self, start: usize, sum: i64) {
        for i in start..self.items.len() {
            let Some(next) = sum.checked_add(self.items[i].value) else {
                continue;
            };
            if next > self.target {
                continue;
            }

            self.path.push(i);
            if next == self.target {
                self.record();
            } else {
                self.backtrack(i + 1, next);
            }
            self.path.pop();
        }
    }

    fn record(&mut self) {
        let items = self.path.iter().map(|&i| self.items[i].clone()).collect();
        self.found.push(Combination::new(items));
    }
}

/// Find every non-empty combination whose values sum to exactly `target`.
///
/// Combinations are returned in discovery order, items in selection order.
pub fn find_exact(items: &ItemSet, target: i64) -> Vec<Combination> {
    let mut search = ExactSearch {
        items: items.as_slice(),
        target,
        path: Vec::with_capacity(items.len()),
        found: Vec::new(),
    };
    search.backtrack(0, 0);

    tracing::debug!(amount = target, found = search.found.len(), "exact search complete");
    search.found
}
