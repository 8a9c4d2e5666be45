//! Completed work sessions.

use super::ListEntry;
use crate::utils::money::format_money;
use crate::utils::time::{format_timestamp, hours_between};
use chrono::{DateTime, Local};

/// One completed clock-in-to-clock-out interval with its frozen wage.
/// Sessions are historical facts: never edited or removed after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub clock_in_at: DateTime<Local>,
    pub clock_out_at: DateTime<Local>,
    /// Computed once, at clock-out, from the hourly rate in force at that
    /// moment. A later rate change must not alter past sessions.
    pub wage: f64,
}

impl Session {
    pub fn hours(&self) -> f64 {
        hours_between(self.clock_in_at, self.clock_out_at)
    }
}

/// A session as shown in the history list, carrying its 1-based number
/// (1 = oldest). The list itself is ordered most recent first.
#[derive(Debug, Clone, Copy)]
pub struct SessionEntry {
    pub session: Session,
    pub number: usize,
}

impl ListEntry for SessionEntry {
    fn title(&self) -> String {
        format!(
            "Session #{}: {} - {}",
            self.number,
            format_timestamp(self.session.clock_in_at),
            format_timestamp(self.session.clock_out_at),
        )
    }

    fn description(&self) -> String {
        format!(
            "Duration: {:.2} hours | Wage: {}",
            self.session.hours(),
            format_money(self.session.wage),
        )
    }
}
