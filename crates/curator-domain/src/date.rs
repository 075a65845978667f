//! Calendar-date helpers
//!
//! All deadlines in the catalog are plain ISO calendar dates (`2024-06-01`).
//! Arithmetic is date subtraction, never wall-clock or time-zone math, and a
//! malformed date degrades to "absent" rather than failing a record.

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date, returning `None` for anything malformed.
///
/// Staleness is a health signal, not a correctness gate, so callers treat
/// `None` as "excluded from this check".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whole days from `from` to `to` (negative if `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date(" 2024-06-01 ").is_some());
    }

    #[test]
    fn test_parse_malformed_is_none() {
        assert!(parse_date("").is_none());
        assert!(parse_date("June 1st").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("2024/06/01").is_none());
    }

    #[test]
    fn test_days_between() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        assert_eq!(days_between(a, b), 100);
        assert_eq!(days_between(b, a), -100);
        assert_eq!(days_between(a, a), 0);
    }
}
