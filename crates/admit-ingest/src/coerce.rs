//! Lenient cell coercion.
//!
//! All three helpers treat empty and unparseable input the same way: `None`.
//! Callers decide what a missing value means; nothing here ever errors.

use chrono::NaiveDate;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a string as a calendar date, returning None for invalid or empty
/// strings. Accepts ISO dates plus the two slash-delimited layouts seen in
/// exports of this dataset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
/// Whole-number decimal spellings ("30.0") are accepted; fractional values
/// are not.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Some(parsed);
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
