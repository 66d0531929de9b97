//! Utility helpers for toolbelt.
//!
//! Peripheral helpers that sit next to the [`runner`] combinators: JSON fetch
//! wrappers, tuple-style error capture and small string/number functions.
//!
//! # Modules
//!
//! ## Fetch (`fetch`)
//!
//! JSON-over-HTTP wrappers that reject non-2xx statuses and non-JSON bodies:
//!
//! ```rust,ignore
//! use helpers::fetch::{get_json, post_json, RequestOptions};
//! use std::time::Duration;
//!
//! let options = RequestOptions::new().with_timeout(Duration::from_secs(5));
//! let todo: Todo = get_json("https://api.example.com/todos/1", &options).await?;
//! let saved: Todo = post_json("https://api.example.com/todos", &todo, &options).await?;
//! ```
//!
//! ## Try/catch (`try_catch`)
//!
//! ```rust,ignore
//! use helpers::try_catch;
//!
//! let (todo, error) = try_catch(get_json::<Todo>(url, &options)).await;
//! ```
//!
//! ## Text and numbers (`text`, `number`)
//!
//! ```rust
//! use helpers::{capitalize, clamp, is_even, reverse};
//!
//! assert_eq!(capitalize("toolbelt"), "Toolbelt");
//! assert_eq!(reverse("abc"), "cba");
//! assert!(is_even(10));
//! assert_eq!(clamp(12, 0, 10), 10);
//! ```
//!
//! ## Config (`config`)
//!
//! YAML/JSON configuration file loading.

pub mod config;
pub mod error;
pub mod fetch;
pub mod number;
pub mod text;
pub mod try_catch;

// Re-export commonly used types
pub use error::{HelperError, Result};

pub use config::{load_config_file, load_json_config, load_yaml_config, ValidateConfig};
pub use fetch::{get_json, post_json, FetchConfig, JsonClient, RequestOptions};
pub use number::{clamp, is_even, random_number};
pub use text::{capitalize, is_empty, reverse};
pub use try_catch::{try_catch, try_catch_sync};
