//! Utilities for calendar date strings
//!
//! The `YYYY-MM-DD` form is what `<input type="date">` reads and writes.

use chrono::{DateTime, TimeZone};

/// Date portion of an ISO timestamp: everything before the `T` separator
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn iso_date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Calendar date of an instant in its own zone, as `YYYY-MM-DD`
pub fn iso_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // to_rfc3339 always emits "<date>T<time><offset>"
    iso_date_part(&instant.to_rfc3339()).to_string()
}

/// True when `value` is a real calendar date in `YYYY-MM-DD` form
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
