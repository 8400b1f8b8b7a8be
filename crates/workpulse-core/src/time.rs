//! Timestamp parsing with explicit fallbacks.
//!
//! Feeds deliver timestamps as strings in a few shapes. Anything that does not
//! parse sorts as the Unix epoch and displays as [`UNKNOWN_DATE_DISPLAY`].

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::UNKNOWN_DATE_DISPLAY;

/// Sort key for an unparseable timestamp (the Unix epoch).
pub const FALLBACK_MILLIS: i64 = 0;

/// Parse a feed timestamp.
///
/// Accepted shapes, tried in order:
/// - RFC 3339: `2025-08-05T08:15:00Z`
/// - calendar date: `2025-08-05` (UTC midnight)
/// - year-month: `2025-08` (first of the month, UTC midnight)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    // chrono needs a day to build a date; pin year-month values to the 1st.
    if raw.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }
    None
}

/// Epoch milliseconds for ordering. Unparseable input maps to [`FALLBACK_MILLIS`].
pub fn sort_key_millis(raw: &str) -> i64 {
    parse_timestamp(raw)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(FALLBACK_MILLIS)
}

/// Display form such as `Aug 5, 2025`, or `—` when unparseable.
pub fn display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => UNKNOWN_DATE_DISPLAY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_timestamp("2025-08-05T08:15:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-08-05T08:15:00+00:00");
    }

    #[test]
    fn parses_offset_into_utc() {
        let a = sort_key_millis("2025-08-05T10:15:00+02:00");
        let b = sort_key_millis("2025-08-05T08:15:00Z");
        assert_eq!(a, b);
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let dt = parse_timestamp("2025-08-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-08-01T00:00:00+00:00");
    }

    #[test]
    fn parses_year_month_as_first_of_month() {
        let dt = parse_timestamp("2025-03").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-03-01T00:00:00+00:00");
    }

    #[test]
    fn garbage_falls_back_to_epoch() {
        assert_eq!(sort_key_millis("not a date"), FALLBACK_MILLIS);
        assert_eq!(sort_key_millis(""), FALLBACK_MILLIS);
        assert_eq!(sort_key_millis("2025-13-45"), FALLBACK_MILLIS);
    }

    #[test]
    fn display_formats_and_falls_back() {
        assert_eq!(display_date("2025-08-05T08:15:00Z"), "Aug 5, 2025");
        assert_eq!(display_date("???"), "—");
    }

    #[test]
    fn dates_order_chronologically() {
        assert!(sort_key_millis("2025-08-01") < sort_key_millis("2025-08-03"));
        assert!(sort_key_millis("2025-08-03") < sort_key_millis("2025-08-05"));
    }
}
