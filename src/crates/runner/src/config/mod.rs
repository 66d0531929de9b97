//! Runner configuration
//!
//! Defaults for the runner combinators, loadable from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use runner::config::RunnerConfig;
//!
//! // RUNNER_CONCURRENCY=4 RUNNER_RETRY_ATTEMPTS=5 RUNNER_RETRY_DELAY_MS=250
//! let config = RunnerConfig::from_env("RUNNER_")?;
//! config.validate()?;
//!
//! let results = runner::parallel(tasks, config.concurrency).await?;
//! let value = runner::with_retry(&config.retry_policy(), || fetch()).await?;
//! ```

mod env;

pub use env::{build_env_key, get_env, get_env_parse, get_env_parse_or};

use crate::async_utils::retry::RetryPolicy;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Defaults applied by callers that drive the runner from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Concurrency ceiling for `parallel`; `None` is unbounded.
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Total attempts for `retry`, including the first.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: usize,

    /// Constant delay between retry attempts, in milliseconds.
    #[serde(default)]
    pub retry_delay_ms: u64,
}

impl RunnerConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self {
            concurrency: None,
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: 0,
        }
    }

    /// Set the concurrency ceiling.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit);
        self
    }

    /// Set the retry attempt budget.
    pub fn with_retry_attempts(mut self, attempts: usize) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Set the delay between retry attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Load configuration from `<PREFIX>CONCURRENCY`, `<PREFIX>RETRY_ATTEMPTS`
    /// and `<PREFIX>RETRY_DELAY_MS`. Unset variables keep their defaults.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let defaults = Self::new();

        Ok(Self {
            concurrency: get_env_parse(&build_env_key(prefix, "concurrency"))?,
            retry_attempts: get_env_parse_or(
                &build_env_key(prefix, "retry_attempts"),
                defaults.retry_attempts,
            )?,
            retry_delay_ms: get_env_parse_or(
                &build_env_key(prefix, "retry_delay_ms"),
                defaults.retry_delay_ms,
            )?,
        })
    }

    /// Reject values the combinators would refuse at call time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == Some(0) {
            return Err(ConfigError("concurrency must be positive".to_string()));
        }
        if self.retry_attempts == 0 {
            return Err(ConfigError("retry_attempts must be positive".to_string()));
        }
        Ok(())
    }

    /// Delay between retry attempts.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Retry policy described by this configuration.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts).with_delay(self.retry_delay())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_retry_attempts() -> usize {
    3
}
