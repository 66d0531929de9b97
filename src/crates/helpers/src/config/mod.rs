//! Configuration file loading.
//!
//! Loads any deserializable configuration from YAML or JSON files, picking the
//! format from the file extension.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpers::config::load_config_file;
//! use helpers::fetch::FetchConfig;
//!
//! let config: FetchConfig = load_config_file("fetch.yaml")?;
//! ```

use crate::error::{HelperError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load configuration from a YAML file.
pub fn load_yaml_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    serde_yaml::from_str(&content).map_err(|e| {
        HelperError::Config(format!(
            "Failed to parse YAML config from {:?}: {}",
            path.as_ref(),
            e
        ))
    })
}

/// Load configuration from a JSON file.
pub fn load_json_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref())?;
    serde_json::from_str(&content).map_err(|e| {
        HelperError::Config(format!(
            "Failed to parse JSON config from {:?}: {}",
            path.as_ref(),
            e
        ))
    })
}

/// Load configuration from a file (auto-detect format from extension).
pub fn load_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            HelperError::Config(format!("Unable to determine file extension for {:?}", path))
        })?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => load_yaml_config(path),
        "json" => load_json_config(path),
        _ => Err(HelperError::Config(format!(
            "Unsupported config file extension: {}",
            extension
        ))),
    }
}

/// Trait for validating configuration.
pub trait ValidateConfig {
    /// Validate the configuration, returning an error if invalid.
    fn validate(&self) -> Result<()>;
}
