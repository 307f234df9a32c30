//! Typed precondition failures
//!
//! Malformed input lines never reach here; they are skipped during
//! normalization. These errors are for requests the search must refuse.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no valid items found in input (expected lines of the form `name,value`)")]
    NoItems,

    #[error("invalid target amount: {0:?}")]
    InvalidTarget(String),

    #[error("invalid limit values: low={low:?}, high={high:?}")]
    InvalidRange { low: String, high: String },

    #[error("item {name:?} has negative value {value}; only non-negative values are supported")]
    NegativeValue { name: String, value: i64 },
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NoItems => "NO_ITEMS",
            ValidationError::InvalidTarget(_) => "INVALID_TARGET",
            ValidationError::InvalidRange { .. } => "INVALID_RANGE",
            ValidationError::NegativeValue { .. } => "NEGATIVE_VALUE",
        }
    }
}
