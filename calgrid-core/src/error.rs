//! Error types for calgrid.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Unknown view '{0}'. Expected month, week or day")]
    UnknownView(String),

    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalGridError {
    fn from(e: serde_json::Error) -> Self {
        CalGridError::Serialization(e.to_string())
    }
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
