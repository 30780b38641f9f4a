//! Pagination fragments
//!
//! Page lengths come from an allow-list; page numbers are 1-based user input.

use serde::Serialize;
use std::collections::HashMap;

use crate::errors::{ChoiceMap, FiddlerError};
use crate::fragments::ordering::resolve_choice;

/// Resolved LIMIT/OFFSET values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    pub fn to_sql(&self) -> String {
        format!("LIMIT {} OFFSET {}", self.limit, self.offset)
    }
}

/// Resolve the row count for a page-length choice
pub fn resolve_page_length(
    map: &HashMap<String, i64>,
    user_choice: Option<&str>,
) -> Result<i64, FiddlerError> {
    resolve_choice(map, ChoiceMap::PageLength, user_choice).copied()
}

/// Zero-based offset for a 1-based page number, never below 0
pub fn resolve_page_offset(user_page: Option<&str>) -> i64 {
    match user_page {
        Some(page) => parse_page_number(page).saturating_sub(1).max(0),
        None => 0,
    }
}

/// Leading whitespace accepted before a page number (ASCII only)
const PAGE_LEADING_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Lenient integer parse of the longest numeric prefix: leading ASCII
/// whitespace, optional sign, digits, optional `.digits` and optional
/// exponent. A fraction or exponent is evaluated as a float and truncated.
/// Anything unparsable is 0; overflow saturates.
fn parse_page_number(input: &str) -> i64 {
    let s = input.trim_start_matches(PAGE_LEADING_WHITESPACE);
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let int_end = digits_from(sign_len);
    let has_int = int_end > sign_len;
    let mut end = int_end;
    let mut is_float = false;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_int || frac_end > end + 1 {
            end = frac_end;
            is_float = true;
        }
    }
    if !has_int && !is_float {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exp_end = digits_from(end + 1 + exp_sign_len);
        if exp_end > end + 1 + exp_sign_len {
            end = exp_end;
            is_float = true;
        }
    }

    if is_float {
        // `as` saturates out-of-range floats
        return s[..end].parse::<f64>().map_or(0, |value| value as i64);
    }

    let negative = bytes.first() == Some(&b'-');
    let mut value: i64 = 0;
    for &b in &bytes[sign_len..int_end] {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::ordering::DEFAULT_CHOICE;

    #[test]
    fn test_page_offset() {
        let test_cases = [
            (None, 0),
            (Some("1"), 0),
            (Some("2"), 1),
            (Some("3"), 2),
            (Some("0"), 0),
            (Some("-4"), 0),
        ];

        for (page, expected) in test_cases {
            assert_eq!(resolve_page_offset(page), expected, "page {:?}", page);
        }
    }

    #[test]
    fn test_page_offset_lenient_parsing() {
        let test_cases = [
            ("abc", 0),
            ("", 0),
            ("   ", 0),
            ("  5", 4),
            ("+7", 6),
            ("12abc", 11),
            ("3.9", 2),
            ("- 3", 0),
            ("1e3", 999),
            ("2.5e1", 24),
            ("1E2", 99),
            ("-1e3", 0),
            ("1e", 0),
            ("1e+", 0),
            ("4.", 3),
            (".5", 0),
            (".", 0),
            ("\u{3000}5", 0),
            ("\u{a0}5", 0),
            ("\x0C7", 6),
            ("\x0B8", 7),
        ];

        for (page, expected) in test_cases {
            assert_eq!(resolve_page_offset(Some(page)), expected, "page {:?}", page);
        }
    }

    #[test]
    fn test_page_offset_overflow_saturates() {
        assert_eq!(resolve_page_offset(Some("99999999999999999999999")), i64::MAX - 1);
        assert_eq!(resolve_page_offset(Some("-99999999999999999999999")), 0);
        assert_eq!(resolve_page_offset(Some("1e400")), i64::MAX - 1);
        assert_eq!(resolve_page_offset(Some("-1e400")), 0);
    }

    #[test]
    fn test_page_length() {
        let map = HashMap::from([(DEFAULT_CHOICE.to_string(), 20), ("100".to_string(), 100)]);

        assert_eq!(resolve_page_length(&map, None).unwrap(), 20);
        assert_eq!(resolve_page_length(&map, Some("100")).unwrap(), 100);

        let err = resolve_page_length(&map, Some("5000")).unwrap_err();
        assert!(matches!(
            err,
            FiddlerError::UnknownChoice { map: ChoiceMap::PageLength, ref choice } if choice == "5000"
        ));
    }

    #[test]
    fn test_pagination_sql() {
        assert_eq!(Pagination::new(20, 0).to_sql(), "LIMIT 20 OFFSET 0");
        assert_eq!(Pagination::new(50, 3).to_sql(), "LIMIT 50 OFFSET 3");
    }
}
