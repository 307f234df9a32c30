//! Range-sum combination search
//!
//! Walks the full include/exclude tree over item indices. Every node whose
//! running sum lies inside `[low, high]` is recorded, so nested and
//! overlapping combinations are all reported. The root node is the empty
//! combination and is recorded when the window contains zero.

use crate::core::model::{Combination, Item, ItemSet};

struct WithinSearch<'a> {
    items: &'a [Item],
    low: i64,
    high: i64,
    path: Vec<usize>,
    found: Vec<Combination>,
}

impl WithinSearch<'_> {
    /// `fresh` is false on exclude branches, whose path equals the parent's
    /// and was already considered there.
    fn backtrack(&mut self, idx: usize, sum: i64, fresh: bool) {
        if fresh && sum >= self.low && sum <= self.high {
            let items = self.path.iter().map(|&i| self.items[i].clone()).collect();
            self.found.push(Combination::new(items));
        }
        if sum > self.high || idx == self.items.len() {
            return;
        }

        // include, then exclude
        if let Some(next) = sum.checked_add(self.items[idx].value) {
            self.path.push(idx);
            self.backtrack(idx + 1, next, true);
            self.path.pop();
        }
        self.backtrack(idx + 1, sum, false);
    }
}

/// Find every combination whose values sum into the inclusive `[low, high]`
/// window.
///
/// Each subset is produced at most once, in include-first discovery order.
/// `low > high` yields no combinations.
pub fn find_within(items: &ItemSet, low: i64, high: i64) -> Vec<Combination> {
    let mut search = WithinSearch {
        items: items.as_slice(),
        low,
        high,
        path: Vec::with_capacity(items.len()),
        found: Vec::new(),
    };
    search.backtrack(0, 0, true);

    tracing::debug!(low, high, found = search.found.len(), "within search complete");
    search.found
}
