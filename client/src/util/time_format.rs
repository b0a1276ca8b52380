//! Timestamp helpers for the bookings table.
//!
//! The backend sends RFC 3339 timestamps, sometimes without an offset; those
//! are read as UTC.

#[cfg(test)]
#[path = "time_format_test.rs"]
mod time_format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::net::types::MISSING;

pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, naive).ok().map(PrimitiveDateTime::assume_utc)
}

/// Human duration between two timestamps, rounded to whole minutes.
///
/// Returns `"-"` when either end is missing or unparseable, or when `end`
/// is not after `start`.
pub fn duration_text(start: Option<&str>, end: Option<&str>) -> String {
    let (Some(start), Some(end)) = (start.and_then(parse_timestamp), end.and_then(parse_timestamp)) else {
        return MISSING.to_owned();
    };
    let millis = (end - start).whole_milliseconds();
    if millis <= 0 {
        return MISSING.to_owned();
    }
    let minutes = (millis + 30_000) / 60_000;
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let (hours, rest) = (minutes / 60, minutes % 60);
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}

/// Start time as `YYYY-MM-DD HH:MM` in UTC; unparseable input is echoed.
pub fn format_start_time(raw: &str) -> String {
    let display = format_description!("[year]-[month]-[day] [hour]:[minute]");
    parse_timestamp(raw)
        .and_then(|ts| ts.to_offset(UtcOffset::UTC).format(display).ok())
        .unwrap_or_else(|| raw.to_owned())
}
