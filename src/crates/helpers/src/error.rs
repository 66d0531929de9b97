//! Error types for helper functions.

use runner::{ConfigError, TaskError};
use thiserror::Error;

/// Result type for helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;

/// Errors that can occur in helper operations.
#[derive(Debug, Error)]
pub enum HelperError {
    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response carried a non-2xx status.
    #[error("HTTP {status}: {reason} ({url})")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },

    /// Response was not JSON.
    #[error("Expected JSON response from {url}, got content-type '{content_type}'")]
    ContentType { content_type: String, url: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request did not complete in time.
    #[error("{0}")]
    Timeout(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for HelperError {
    fn from(err: serde_json::Error) -> Self {
        HelperError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for HelperError {
    fn from(err: serde_yaml::Error) -> Self {
        HelperError::Serialization(err.to_string())
    }
}

impl From<ConfigError> for HelperError {
    fn from(err: ConfigError) -> Self {
        HelperError::Config(err.0)
    }
}

impl From<TaskError<HelperError>> for HelperError {
    fn from(err: TaskError<HelperError>) -> Self {
        match err {
            TaskError::Failed(inner) => inner,
            TaskError::Timeout { message, .. } => HelperError::Timeout(message),
            TaskError::InvalidArgument(message) => HelperError::InvalidInput(message),
            other => HelperError::Other(other.to_string()),
        }
    }
}
