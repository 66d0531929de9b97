//! Async combinators over tasks
//!
//! A task is a zero-argument closure returning a future that resolves to
//! `Result<T, E>`. This module drives such tasks:
//! - `sequence` runs them one at a time
//! - `parallel` runs them with a concurrency ceiling
//! - `retry` re-invokes one of them with a fixed delay
//! - `timeout` bounds the wait on one of them
//!
//! # Example
//!
//! ```rust,ignore
//! use runner::async_utils::{parallel::parallel, retry::retry, timeout::timeout};
//! use std::time::Duration;
//!
//! // Fetch pages four at a time, each retried and time-boxed
//! let tasks = urls.into_iter().map(|url| {
//!     move || async move {
//!         retry(
//!             || timeout(fetch_page(url.clone()), Duration::from_secs(10), None),
//!             3,
//!             Duration::from_millis(500),
//!         )
//!         .await
//!     }
//! });
//! let pages = parallel(tasks, Some(4)).await?;
//! ```

pub mod parallel;
pub mod retry;
pub mod sequence;
pub mod timeout;
