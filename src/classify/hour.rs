//! Hour-of-day bucketing.

use std::sync::LazyLock;

use chrono::{NaiveDateTime, Timelike};
use regex::Regex;

use crate::config::TIMESTAMP_FORMAT;

/// Digit layout of `TIMESTAMP_FORMAT`. chrono alone also takes leading
/// whitespace and a signed year.
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}\s+[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$")
        .expect("timestamp shape pattern is a valid regex")
});

/// chrono stores a `:60` leap second as an extra second of nanoseconds.
const LEAP_SECOND_NANOS: u32 = 1_000_000_000;

/// Returns the hour (0-23) of a `MM/DD/YYYY HH:MM:SS` timestamp.
///
/// Returns `None` for anything that does not parse as a real date and time in
/// that layout: wrong separators, leading or trailing text, signed years,
/// out-of-range fields (leap second `:60` included), or impossible dates such
/// as February 30th.
pub fn extract_hour(timestamp: &str) -> Option<u8> {
    if !TIMESTAMP_SHAPE.is_match(timestamp) {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    if parsed.nanosecond() >= LEAP_SECOND_NANOS {
        return None;
    }
    u8::try_from(parsed.hour()).ok()
}
