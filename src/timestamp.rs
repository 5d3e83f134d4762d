//! Compact, sortable timestamp strings.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Format `dt` as `YYYYMMDDTHHMMSS` + milliseconds + zone, e.g.
/// `20130203T195400000UTC`.
pub fn timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%Y%m%dT%H%M%S%3f%Z").to_string()
}

/// Like [`timestamp`], but with year, month, day and time separated by
/// `delimiter`, e.g. `2017/01/01/123401000UTC` for `"/"`.
///
/// Handy for object-store keys where the delimiter groups by date.
pub fn timestamp_with_delimiter<Tz>(dt: &DateTime<Tz>, delimiter: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    [
        dt.format("%Y").to_string(),
        dt.format("%m").to_string(),
        dt.format("%d").to_string(),
        dt.format("%H%M%S%3f%Z").to_string(),
    ]
    .join(delimiter)
}

/// Convert epoch milliseconds to a UTC time; `None` when out of range.
pub fn ms_to_time(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}
