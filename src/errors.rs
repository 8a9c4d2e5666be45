//! Unified application error type.
//! All modules (core, app, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / terminal
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("stdin is not a terminal")]
    NotATerminal,

    #[error("terminal error: {0}")]
    Terminal(String),

    // ---------------------------
    // Roster validation
    // ---------------------------
    /// Composite message, one line per missing field.
    #[error("{0}")]
    Validation(String),

    #[error("Hourly rate must be a numeric value.")]
    InvalidRate(String),

    // ---------------------------
    // Clock state
    // ---------------------------
    #[error("Employee is already clocked in.")]
    AlreadyClockedIn,

    #[error("Employee is not clocked in yet.")]
    NotClockedIn,

    #[error("No employee selected.")]
    NoSelection,
}

pub type AppResult<T> = Result<T, AppError>;
