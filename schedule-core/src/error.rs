//! Error types for the schedule core.

use thiserror::Error;

/// Errors that can occur while parsing form input, shifting dates or
/// loading configuration.
///
/// Store mutations never produce these: updating or deleting an unknown
/// event is a no-op.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown view mode '{0}'. Expected day, week or month")]
    UnknownView(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
