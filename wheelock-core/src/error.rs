//! Error types for schedule conversion.

use thiserror::Error;

/// Errors that can occur while turning a schedule into a calendar.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Bad date spec: {0}")]
    BadDate(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
