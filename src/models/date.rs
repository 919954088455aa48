use chrono::{DateTime, NaiveDate, Utc};

/// Rendering used for every exercise date on the wire, e.g. `Mon Jan 01 2024`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Parse a caller-supplied date.
///
/// Accepts a bare `yyyy-mm-dd` calendar date, taken as midnight UTC, or a full
/// RFC 3339 timestamp. Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Last millisecond of the UTC day containing `at`.
pub fn end_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map(|dt| dt.and_utc())
        .unwrap_or(at)
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}
