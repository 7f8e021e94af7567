// src/utils/time.rs
use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000; // 30 days
const YEAR: i64 = 31_536_000; // 365 days

/// Render `timestamp` relative to `now`, e.g. "3 hours ago".
///
/// Units are never singularized, so one hour renders as "1 hours ago".
/// Timestamps in the future render as "just now".
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed((now - timestamp).num_seconds())
}

pub fn format_elapsed(elapsed: i64) -> String {
    if elapsed < MINUTE {
        "just now".to_string()
    } else if elapsed < HOUR {
        format!("{} minutes ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{} hours ago", elapsed / HOUR)
    } else if elapsed < MONTH {
        format!("{} days ago", elapsed / DAY)
    } else if elapsed < YEAR {
        format!("{} months ago", elapsed / MONTH)
    } else {
        format!("{} years ago", elapsed / YEAR)
    }
}
