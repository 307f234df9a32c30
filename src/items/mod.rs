//! Items module - Turn raw `name,value` text into a normalized item set
//!
//! Lines without a comma or with a non-integer value are skipped, exact
//! (name, value) duplicates are dropped, and the result is sorted by name.

pub mod normalize;

pub use normalize::normalize_text;
