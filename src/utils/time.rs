//! Time utilities: timestamp formatting and duration-to-hours conversion.

use chrono::{DateTime, Local};

/// Display format for clock timestamps, e.g. "03/14/26 9:05AM".
const TIMESTAMP_FORMAT: &str = "%m/%d/%y %-I:%M%p";

pub fn format_timestamp(t: DateTime<Local>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Fractional hours between two instants, not truncated.
pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}
