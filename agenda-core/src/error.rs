//! Error types for the agenda scheduler.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that can occur in agenda operations.
///
/// None of these are fatal: each is reported to the user where it happens.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Please fill all fields ({0} is empty)")]
    Validation(&'static str),

    #[error("Invalid date/time format: {0}")]
    Parse(String),

    #[error("Event time overlaps with another event at {}", .0.format("%d-%m-%Y %H:%M"))]
    DuplicateTimestamp(NaiveDateTime),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unreadable events file: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
