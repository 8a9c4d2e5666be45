//! Session engine: the clock-in/clock-out transition and wage computation.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Session};
use crate::utils::time::hours_between;
use chrono::{DateTime, Local};

/// Starts a session. Never overwrites an active clock-in.
pub fn clock_in(employee: &mut Employee, now: DateTime<Local>) -> AppResult<()> {
    if employee.active_clock_in.is_some() {
        return Err(AppError::AlreadyClockedIn);
    }
    employee.active_clock_in = Some(now);
    Ok(())
}

/// Ends the active session. The wage is computed from fractional hours and
/// the employee's *current* hourly rate, then frozen on the session; a later
/// rate change must not retroactively alter history.
pub fn clock_out(employee: &mut Employee, now: DateTime<Local>) -> AppResult<Session> {
    let clock_in_at = employee.active_clock_in.ok_or(AppError::NotClockedIn)?;

    let hours = hours_between(clock_in_at, now);
    let session = Session {
        clock_in_at,
        clock_out_at: now,
        wage: hours * employee.hourly_rate,
    };

    employee.sessions.push(session);
    employee.active_clock_in = None;
    Ok(session)
}
