//! Async task runner for toolbelt
//!
//! A task is a deferred, zero-argument operation: a closure that returns a
//! future resolving to `Result<T, E>`. This crate drives batches of such tasks.
//!
//! # Modules
//!
//! - `async_utils` - `sequence`, `parallel`, `retry`, `timeout` and `sleep`
//! - `batch` - fixed-size chunking of input sequences
//! - `config` - runner defaults loaded from environment variables
//! - `error` - `TaskError`, the failure type shared by every combinator
//!
//! # Example
//!
//! ```rust,ignore
//! use runner::{batch, parallel, sequence};
//!
//! // Process ids in chunks of 100, each chunk with at most 8 requests in flight
//! for chunk in batch(ids, 100)? {
//!     let tasks = chunk.into_iter().map(|id| move || lookup(id));
//!     let rows = parallel(tasks, Some(8)).await?;
//!     store(rows).await?;
//! }
//! ```

pub mod async_utils;
pub mod batch;
pub mod config;
pub mod error;

pub use async_utils::parallel::parallel;
pub use async_utils::retry::{retry, with_retry, RetryPolicy};
pub use async_utils::sequence::sequence;
pub use async_utils::timeout::{sleep, timeout};
pub use batch::batch;
pub use config::RunnerConfig;
pub use error::{ArgumentError, ConfigError, Result, TaskError};

