//! Timeout utilities for async operations
//!
//! Provides the cooperative `sleep` primitive and a `timeout` wrapper that
//! bounds how long the caller waits on an operation.

use crate::error::TaskError;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout as tokio_timeout;
use tracing::warn;

/// Suspend the current task for `duration`
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Wait on `operation` for at most `duration`
///
/// The operation is spawned onto the tokio runtime and raced against a timer.
/// Whichever side settles first wins and the other is disarmed: on completion
/// the timer is dropped, on timeout the operation's eventual result is never
/// observed. The operation itself is not cancelled; it keeps running detached
/// until it finishes.
///
/// `message` replaces the default `"Operation timed out after {ms}ms"`.
///
/// # Example
///
/// ```rust,ignore
/// use runner::timeout;
/// use std::time::Duration;
///
/// let body = timeout(fetch_body(url), Duration::from_secs(5), None).await?;
/// ```
pub async fn timeout<F, T, E>(
    operation: F,
    duration: Duration,
    message: Option<String>,
) -> std::result::Result<T, TaskError<E>>
where
    F: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let handle = tokio::spawn(operation);

    match tokio_timeout(duration, handle).await {
        Ok(Ok(Ok(result))) => Ok(result),
        Ok(Ok(Err(error))) => Err(TaskError::Failed(error)),
        Ok(Err(join_error)) => Err(TaskError::Panicked(join_error.to_string())),
        Err(_elapsed) => {
            let message = message.unwrap_or_else(|| default_message(duration));
            warn!(timeout_ms = duration.as_millis() as u64, "{}", message);
            Err(TaskError::Timeout {
                message,
                after: duration,
            })
        }
    }
}

fn default_message(duration: Duration) -> String {
    format!("Operation timed out after {}ms", duration.as_millis())
}
