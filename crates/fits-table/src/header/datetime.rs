//! Timestamp formatting for the `UTC=` commentary card.

use chrono::{NaiveDateTime, Utc};

/// Current wall-clock time in UTC.
#[must_use]
pub fn utc_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Format as `UTC=YYYY-MM-DD.HH:MM:SS`.
#[must_use]
pub fn format_utc_stamp(dt: NaiveDateTime) -> String {
    dt.format("UTC=%Y-%m-%d.%H:%M:%S").to_string()
}
