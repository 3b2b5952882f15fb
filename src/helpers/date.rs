//! Date helper functions

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date string in various formats
///
/// Offsets are dropped: the calendar date is the one written in the
/// string, whatever the reader's timezone.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Whether `format` is a chrono format string chrono can render
pub fn is_valid_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Format a date for display with a chrono format string
///
/// Unparseable input, or a format chrono rejects, gives the input unchanged.
///
/// # Examples
/// ```ignore
/// format_date("2024-01-15", "%Y년 %-m월 %-d일") // -> "2024년 1월 15일"
/// ```
pub fn format_date(raw: &str, format: &str) -> String {
    match parse_date_string(raw) {
        Some(dt) => {
            let mut out = String::new();
            if write!(out, "{}", dt.format(format)).is_err() {
                tracing::warn!("Invalid date format {:?}, showing {:?} as written", format, raw);
                return raw.to_string();
            }
            out
        }
        None => {
            tracing::debug!("Unrecognized date {:?}, shown as written", raw);
            raw.to_string()
        }
    }
}
