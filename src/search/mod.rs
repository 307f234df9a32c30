//! Search module - Subset enumeration over a normalized item set
//!
//! Provides:
//! - exact: combinations summing to exactly a target
//! - within: combinations summing into an inclusive window
//!
//! Both searches assume non-negative item values; `check_items` enforces that
//! before a search runs.

pub mod exact;
pub mod within;

pub use exact::find_exact;
pub use within::find_within;

use crate::core::error::ValidationError;
use crate::core::model::{Combination, ItemSet, SearchSpec};
use crate::core::util::parse_leading_int;

/// Build an exact search from a raw target parameter
pub fn exact_request(target: Option<&str>) -> Result<SearchSpec, ValidationError> {
    let raw = target.unwrap_or_default();
    let target =
        parse_leading_int(raw).ok_or_else(|| ValidationError::InvalidTarget(raw.to_string()))?;
    Ok(SearchSpec::Exact { target })
}

/// Build a within search from raw limit parameters.
///
/// `low > high` is accepted and produces an empty result.
pub fn within_request(
    low: Option<&str>,
    high: Option<&str>,
) -> Result<SearchSpec, ValidationError> {
    let raw_low = low.unwrap_or_default();
    let raw_high = high.unwrap_or_default();
    match (parse_leading_int(raw_low), parse_leading_int(raw_high)) {
        (Some(low), Some(high)) => Ok(SearchSpec::Within { low, high }),
        _ => Err(ValidationError::InvalidRange {
            low: raw_low.to_string(),
            high: raw_high.to_string(),
        }),
    }
}

/// Check that an item set can be searched
pub fn check_items(items: &ItemSet) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    if let Some(item) = items.iter().find(|i| i.value < 0) {
        return Err(ValidationError::NegativeValue {
            name: item.name.clone(),
            value: item.value,
        });
    }
    Ok(())
}

/// Run the search described by `spec`
pub fn run_search(items: &ItemSet, spec: SearchSpec) -> Vec<Combination> {
    match spec {
        SearchSpec::Exact { target } => find_exact(items, target),
        SearchSpec::Within { low, high } => {
            if low > high {
                tracing::warn!(low, high, "lower limit is above upper limit, nothing can match");
            }
            find_within(items, low, high)
        }
    }
}
