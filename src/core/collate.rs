//! Name collation
//!
//! Approximates locale-aware ordering for item names in three levels:
//!
//! 1. Base characters. Names are decomposed (NFD), combining marks are
//!    dropped and letters are folded to lowercase. Whitespace and punctuation
//!    sort before digits, digits before letters.
//! 2. Accents. An unaccented name sorts before its accented twin.
//! 3. Case. Lowercase ahead of uppercase.
//!
//! Names that differ at none of these levels are equal, so stable sorts keep
//! their input order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two item names for display and canonical ordering
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(primary_weights(b))
        .then_with(|| accent_weights(a).cmp(accent_weights(b)))
        .then_with(|| compare_case(a, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Punctuation
    }
}

/// Base letters only: accents stripped, case folded
fn primary_weights(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Case folded but with combining marks kept in place
fn accent_weights(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Tie-break on case: first differing char decides, lowercase first
fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfd().zip(b.nfd()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return ca.cmp(&cb),
        }
    }
    Ordering::Equal
}
