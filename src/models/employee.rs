//! Employee records.

use super::{ListEntry, Session};
use crate::utils::money::format_rate;
use chrono::{DateTime, Local};

pub const STATUS_IDLE: &str = "idle";
pub const STATUS_CLOCKED_IN: &str = "clocked in";
pub const STATUS_CLOCKED_OUT: &str = "clocked out";

#[derive(Debug, Clone)]
pub struct Employee {
    /// Unique, immutable, assigned monotonically by the roster.
    pub id: u32,
    pub first_name: String,
    /// Optional; empty string when absent.
    pub middle_name: String,
    pub last_name: String,
    pub hourly_rate: f64,
    /// Present iff the employee is currently clocked in. An explicit
    /// Option rather than a sentinel time so "clocked in" is unambiguous.
    pub active_clock_in: Option<DateTime<Local>>,
    /// Append-only; insertion order is chronological completion order.
    pub sessions: Vec<Session>,
}

impl Employee {
    pub fn new(
        id: u32,
        first_name: String,
        middle_name: String,
        last_name: String,
        hourly_rate: f64,
    ) -> Self {
        Self {
            id,
            first_name,
            middle_name,
            last_name,
            hourly_rate,
            active_clock_in: None,
            sessions: Vec::new(),
        }
    }

    /// "First Middle Last", with the middle segment omitted entirely
    /// (no double space) when empty.
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        if !self.middle_name.is_empty() {
            name.push(' ');
            name.push_str(&self.middle_name);
        }
        name.push(' ');
        name.push_str(&self.last_name);
        name
    }

    pub fn is_clocked_in(&self) -> bool {
        self.active_clock_in.is_some()
    }

    /// Note: STATUS_IDLE exists but is never returned; an employee with no
    /// history still reads "clocked out". Ambiguous original behavior,
    /// reproduced deliberately (see DESIGN.md).
    pub fn status_label(&self) -> &'static str {
        if self.is_clocked_in() {
            STATUS_CLOCKED_IN
        } else {
            STATUS_CLOCKED_OUT
        }
    }

    pub fn total_wage(&self) -> f64 {
        self.sessions.iter().map(|s| s.wage).sum()
    }
}

impl ListEntry for Employee {
    fn title(&self) -> String {
        format!("{} ({})", self.full_name(), self.status_label())
    }

    fn description(&self) -> String {
        format!("ID: {} | Rate: {}", self.id, format_rate(self.hourly_rate))
    }
}
