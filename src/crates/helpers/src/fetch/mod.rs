//! JSON-over-HTTP fetch helpers.
//!
//! This module provides:
//! - `get_json` / `post_json` wrappers that fail on non-2xx statuses and
//!   non-JSON responses
//! - Client configuration with default headers, user agent and timeout
//! - Per-request options (method, headers, body, timeout)
//!
//! Timeouts use [`runner::timeout`]: the caller stops waiting once the
//! duration elapses, while the request itself runs to completion in the
//! background.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpers::fetch::{FetchConfig, JsonClient, RequestOptions};
//! use std::time::Duration;
//!
//! let client = JsonClient::new(
//!     FetchConfig::new()
//!         .with_timeout(Duration::from_secs(10))
//!         .with_header("Authorization", "Bearer token"),
//! )?;
//!
//! let options = RequestOptions::new();
//! let user: User = client.get_json("https://api.example.com/users/1", &options).await?;
//! let created: User = client
//!     .post_json("https://api.example.com/users", &new_user, &options)
//!     .await?;
//! ```

use crate::config::ValidateConfig;
use crate::error::{HelperError, Result};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use runner::config::{build_env_key, get_env, get_env_parse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Configuration for the JSON client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Default timeout in milliseconds for requests that don't set their own.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// User agent string.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Default headers to include in all requests.
    #[serde(default)]
    pub default_headers: Vec<(String, String)>,
}

impl FetchConfig {
    /// Create a new configuration with no timeout and no extra headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Default request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a default header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Load configuration from `<PREFIX>TIMEOUT_MS` and `<PREFIX>USER_AGENT`.
    pub fn from_env(prefix: &str) -> Result<Self> {
        Ok(Self {
            timeout_ms: get_env_parse(&build_env_key(prefix, "timeout_ms"))?,
            user_agent: get_env(&build_env_key(prefix, "user_agent"))?,
            default_headers: Vec::new(),
        })
    }
}

impl ValidateConfig for FetchConfig {
    fn validate(&self) -> Result<()> {
        if self.timeout_ms == Some(0) {
            return Err(HelperError::Config("timeout must be positive".to_string()));
        }

        for (key, value) in &self.default_headers {
            HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HelperError::Config(format!("Invalid header name '{}': {}", key, e)))?;
            HeaderValue::from_str(value).map_err(|e| {
                HelperError::Config(format!("Invalid value for header '{}': {}", key, e))
            })?;
        }

        Ok(())
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; GET when unset.
    pub method: Option<Method>,

    /// Extra headers for this request.
    pub headers: Vec<(String, String)>,

    /// Raw request body.
    pub body: Option<String>,

    /// Timeout overriding the client default.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Create empty options (GET, no body, client default timeout).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set the raw request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the timeout for this request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client that sends requests and decodes JSON responses.
#[derive(Debug, Clone)]
pub struct JsonClient {
    config: FetchConfig,
    client: Client,
}

impl JsonClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| HelperError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Send a request and decode the JSON response.
    ///
    /// Uses `options.method` (GET by default). Fails with
    /// [`HelperError::Status`] on a non-2xx status, with
    /// [`HelperError::ContentType`] when the response isn't JSON, and with
    /// [`HelperError::Timeout`] when the timeout elapses first.
    pub async fn get_json<T>(&self, url: &str, options: &RequestOptions) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let method = options.method.clone().unwrap_or(Method::GET);
        debug!(method = %method, url = url, "Sending JSON request");

        let mut req = self.client.request(method, url);

        for (key, value) in self.config.default_headers.iter().chain(&options.headers) {
            req = req.header(key, value);
        }

        if let Some(body) = &options.body {
            req = req.body(body.clone());
        }

        let owned_url = url.to_string();
        let fetch = async move {
            let response = req.send().await?;
            read_json::<T>(response, &owned_url).await
        };

        match options.timeout.or(self.config.timeout()) {
            Some(limit) => Ok(runner::timeout(fetch, limit, None).await?),
            None => fetch.await,
        }
    }

    /// Serialize `body` as JSON, POST it and decode the JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B, options: &RequestOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let payload = serde_json::to_string(body)?;
        let mut options = options.clone();
        options
            .headers
            .retain(|(key, _)| !key.eq_ignore_ascii_case(CONTENT_TYPE.as_str()));
        let options = options
            .with_method(Method::POST)
            .with_header(CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE)
            .with_body(payload);

        self.get_json(url, &options).await
    }
}

/// Check status and content type, then decode the body.
async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), url = url, "Request failed");
        return Err(HelperError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            url: url.to_string(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !content_type.contains(JSON_CONTENT_TYPE) {
        return Err(HelperError::ContentType {
            content_type,
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetch `url` with a default client and decode the JSON response.
pub async fn get_json<T>(url: &str, options: &RequestOptions) -> Result<T>
where
    T: DeserializeOwned + Send + 'static,
{
    JsonClient::new(FetchConfig::default())?
        .get_json(url, options)
        .await
}

/// POST `body` as JSON with a default client and decode the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B, options: &RequestOptions) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned + Send + 'static,
{
    JsonClient::new(FetchConfig::default())?
        .post_json(url, body, options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_builder() {
        let config = FetchConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent")
            .with_header("X-Custom", "value");

        assert_eq!(config.timeout_ms, Some(60_000));
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(
            config.default_headers,
            vec![("X-Custom".to_string(), "value".to_string())]
        );
    }

    #[test]
    fn test_fetch_config_default_values() {
        let config = FetchConfig::default();

        assert!(config.timeout().is_none());
        assert!(config.user_agent.is_none());
        assert!(config.default_headers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fetch_config_rejects_zero_timeout() {
        let config = FetchConfig::new().with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(HelperError::Config(_))));
        assert!(JsonClient::new(config).is_err());
    }

    #[test]
    fn test_fetch_config_rejects_bad_header() {
        let config = FetchConfig::new().with_header("bad header", "value");
        assert!(config.validate().is_err());

        let config = FetchConfig::new().with_header("X-Ok", "line\nbreak");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fetch_config_from_env() {
        std::env::set_var("FETCH_CFG_TEST_TIMEOUT_MS", "1500");
        std::env::set_var("FETCH_CFG_TEST_USER_AGENT", "toolbelt/0.1");

        let config = FetchConfig::from_env("FETCH_CFG_TEST_").unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.user_agent, Some("toolbelt/0.1".to_string()));

        std::env::remove_var("FETCH_CFG_TEST_TIMEOUT_MS");
        std::env::remove_var("FETCH_CFG_TEST_USER_AGENT");
    }

    #[test]
    fn test_fetch_config_from_env_invalid_timeout() {
        std::env::set_var("FETCH_BAD_TEST_TIMEOUT_MS", "soon");
        let result = FetchConfig::from_env("FETCH_BAD_TEST_");
        assert!(matches!(result, Err(HelperError::Config(_))));
        std::env::remove_var("FETCH_BAD_TEST_TIMEOUT_MS");
    }

    #[test]
    fn test_fetch_config_serialization() {
        let config = FetchConfig::new()
            .with_timeout(Duration::from_millis(500))
            .with_header("X-Request-ID", "req-123");

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: FetchConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_fetch_config_reads_millisecond_timeout() {
        let config: FetchConfig =
            serde_json::from_str(r#"{"timeout_ms": 500, "user_agent": "toolbelt"}"#).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
        assert_eq!(config.user_agent.as_deref(), Some("toolbelt"));

        let config: FetchConfig = serde_yaml::from_str("timeout_ms: 250
").unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new()
            .with_method(Method::PUT)
            .with_header("X-Trace", "abc")
            .with_body("{}")
            .with_timeout(Duration::from_millis(250));

        assert_eq!(options.method, Some(Method::PUT));
        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.body.as_deref(), Some("{}"));
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
    }

    #[tokio::test]
    async fn test_get_json_invalid_url() {
        let result: Result<serde_json::Value> =
            get_json("not-a-valid-url", &RequestOptions::new()).await;
        assert!(matches!(result, Err(HelperError::Http(_))));
    }
}
