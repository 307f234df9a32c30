//! Common utilities

use once_cell::sync::Lazy;
use regex::Regex;
use xxhash_rust::xxh3::xxh3_64;

/// Optional sign followed by digits at the start of a field
static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("Invalid LEADING_INT_RE regex"));

/// Line terminator: LF or CRLF
static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("Invalid LINE_BREAK_RE regex"));

/// Hex xxh3 digest of bytes
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Trim whitespace and stray byte-order marks from a field
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Parse the leading base-10 integer of a trimmed field.
///
/// Trailing characters after the digits are ignored (`"12abc"` is 12,
/// `"7.9"` is 7). Returns `None` for an empty field, a field that does not
/// start with digits, or a value outside the i64 range.
pub fn parse_leading_int(field: &str) -> Option<i64> {
    let m = LEADING_INT_RE.find(trim_field(field))?;
    m.as_str().parse::<i64>().ok()
}

/// Split text into lines on `\n` or `\r\n`
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK_RE.split(text)
}

/// Remove a leading UTF-8 byte-order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(hash.len(), 16); // 64-bit hex
        assert_eq!(hash, hash_bytes(b"hello world"));
        assert_ne!(hash, hash_bytes(b"hello world!"));
    }

    #[test]
    fn test_parse_leading_int_plain() {
        assert_eq!(parse_leading_int("10"), Some(10));
        assert_eq!(parse_leading_int("  42  "), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("007"), Some(7));
    }

    #[test]
    fn test_parse_leading_int_trailing_garbage() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("7.9"), Some(7));
        assert_eq!(parse_leading_int("100 USD"), Some(100));
    }

    #[test]
    fn test_parse_leading_int_rejects() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("   "), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("$10"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 5"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_trim_field() {
        assert_eq!(trim_field("  Tea \t"), "Tea");
        assert_eq!(trim_field("\u{feff}Tea"), "Tea");
        assert_eq!(trim_field(" \u{feff} Tea\u{feff}"), "Tea");
        assert_eq!(trim_field("Green\u{feff}Tea"), "Green\u{feff}Tea");
        assert_eq!(parse_leading_int("\u{feff}12"), Some(12));
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a,1\r\nb,2\nc,3").collect();
        assert_eq!(lines, vec!["a,1", "b,2", "c,3"]);

        let lines: Vec<_> = split_lines("a,1\n").collect();
        assert_eq!(lines, vec!["a,1", ""]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}Items"), "Items");
        assert_eq!(strip_bom("Items"), "Items");
    }
}
