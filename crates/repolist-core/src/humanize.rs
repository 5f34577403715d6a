//! Relative "N ago" time strings
//!
//! Months are an average length (days x 4800/146097) rather than calendar
//! months, so output can be one unit off a calendar-based count right at the
//! 26 day and 11 month thresholds.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Months in a day, averaged over the 400 year Gregorian cycle
const MONTHS_PER_DAY: f64 = 4800.0 / 146_097.0;

/// Describe `then` relative to `now`, e.g. `3 days ago` or `in an hour`.
pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_milliseconds();
    let span = describe(elapsed.unsigned_abs() as f64);

    if elapsed < 0 {
        format!("in {}", span)
    } else {
        format!("{} ago", span)
    }
}

fn describe(ms: f64) -> String {
    let seconds = (ms / MS_PER_SECOND).round();
    let minutes = (ms / MS_PER_MINUTE).round();
    let hours = (ms / MS_PER_HOUR).round();
    let days = (ms / MS_PER_DAY).round();
    let months = (ms / MS_PER_DAY * MONTHS_PER_DAY).round();
    let years = (ms / MS_PER_DAY * MONTHS_PER_DAY / 12.0).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    }
}
