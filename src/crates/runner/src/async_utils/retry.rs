//! Retry utilities for async operations
//!
//! Re-invokes a task up to a fixed attempt budget with a constant delay
//! between attempts. There is no backoff growth and no jitter.

use crate::async_utils::timeout::sleep;
use crate::error::TaskError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retrying failed operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first)
    pub max_attempts: usize,

    /// Constant delay between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy with the given max attempts and no delay
    ///
    /// ```rust
    /// use runner::RetryPolicy;
    ///
    /// let policy = RetryPolicy::new(3);
    /// assert_eq!(policy.max_attempts, 3);
    /// assert!(policy.delay.is_zero());
    /// ```
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    /// Set the delay between attempts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check if another attempt is allowed after `attempts` have been made
    pub fn should_retry(&self, attempts: usize) -> bool {
        attempts < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Execute an async operation with retry logic
///
/// Returns the first successful result. When every attempt fails, the most
/// recent failure is returned as [`TaskError::Failed`]. A policy with zero
/// attempts fails with [`TaskError::InvalidArgument`] without invoking
/// `operation`.
///
/// # Example
///
/// ```rust,ignore
/// use runner::{with_retry, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(3).with_delay(Duration::from_millis(200));
/// let body = with_retry(&policy, || fetch_status()).await?;
/// ```
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    mut operation: F,
) -> std::result::Result<T, TaskError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: std::fmt::Debug,
{
    if policy.max_attempts == 0 {
        return Err(TaskError::InvalidArgument(
            "attempts must be greater than 0".to_string(),
        ));
    }

    let mut last_error = None;
    let mut attempts = 0;

    while policy.should_retry(attempts) {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    debug!(attempt = attempts, "Operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(error) => {
                debug!(
                    attempt = attempts,
                    max_attempts = policy.max_attempts,
                    error = ?error,
                    "Attempt failed"
                );

                last_error = Some(error);

                // No wait after the final attempt
                if policy.should_retry(attempts) && !policy.delay.is_zero() {
                    debug!(delay_ms = policy.delay.as_millis() as u64, "Waiting before retry");
                    sleep(policy.delay).await;
                }
            }
        }
    }

    match last_error {
        Some(error) => {
            warn!(
                attempts = attempts,
                error = ?error,
                "All retry attempts exhausted"
            );
            Err(TaskError::Failed(error))
        }
        None => Err(TaskError::RetryFailed),
    }
}

/// Retry `operation` up to `attempts` times, waiting `delay` between attempts
///
/// Shorthand for [`with_retry`] with an ad-hoc [`RetryPolicy`].
pub async fn retry<F, Fut, T, E>(
    operation: F,
    attempts: usize,
    delay: Duration,
) -> std::result::Result<T, TaskError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: std::fmt::Debug,
{
    let policy = RetryPolicy::new(attempts).with_delay(delay);
    with_retry(&policy, operation).await
}
