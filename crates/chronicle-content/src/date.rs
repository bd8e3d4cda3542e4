//! Calendar dates as written in front-matter and as shown on the site.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Datetime layouts accepted after a plain date fails to parse.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Error returned when a front-matter date cannot be understood.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unrecognized date '{0}' (expected YYYY-MM-DD)")]
pub struct DateError(pub String);

/// Parse a front-matter date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM[:SS]`.
/// Only the calendar date as written is kept; offsets are not applied.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local().date());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| DateError(raw.to_string()))
}

/// Format a date for display, e.g. `Mar 5, 2024`.
///
/// Uses a fixed English month table and never consults the locale.
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}
