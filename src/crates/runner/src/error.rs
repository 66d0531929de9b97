//! Error types for the task runner.

use std::time::Duration;
use thiserror::Error;

/// Failure of a runner combinator.
///
/// `E` is the error type produced by the caller's tasks. Task failures are
/// carried verbatim in [`TaskError::Failed`] so the original error can be
/// recovered with [`TaskError::into_inner`].
#[derive(Debug, Error, PartialEq)]
pub enum TaskError<E> {
    /// An argument was rejected before any task started.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A task failed.
    #[error("{0}")]
    Failed(E),

    /// The awaited operation did not settle in time.
    #[error("{message}")]
    Timeout {
        /// Default or caller-supplied message.
        message: String,
        /// Duration that elapsed.
        after: Duration,
    },

    /// Retry finished without recording a failure.
    #[error("retry failed")]
    RetryFailed,

    /// A spawned task panicked or was aborted by the runtime.
    #[error("Task panicked: {0}")]
    Panicked(String),
}

impl<E> TaskError<E> {
    /// Whether this is a timeout failure.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TaskError::Timeout { .. })
    }

    /// Whether this is an invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TaskError::InvalidArgument(_))
    }

    /// The task's own error, if this failure came from a task.
    pub fn into_inner(self) -> Option<E> {
        match self {
            TaskError::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Invalid argument passed to a synchronous helper such as [`crate::batch`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid argument: {0}")]
pub struct ArgumentError(pub String);

impl<E> From<ArgumentError> for TaskError<E> {
    fn from(err: ArgumentError) -> Self {
        TaskError::InvalidArgument(err.0)
    }
}

/// Runner configuration could not be loaded or is invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);

/// Result type for runner operations.
pub type Result<T, E> = std::result::Result<T, TaskError<E>>;
