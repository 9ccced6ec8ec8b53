//! Public configuration for the Fauna client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default Fauna query endpoint.
pub const DEFAULT_FAUNA_ENDPOINT: &str = "https://db.fauna.com/";

/// Configuration for the Fauna client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use guijs_fauna::FaunaClientConfig;
/// use std::time::Duration;
///
/// let config = FaunaClientConfig::new()
///     .with_secret("fnAD...")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Clone)]
pub struct FaunaClientConfig {
    /// Query endpoint URL
    pub(crate) endpoint: String,
    /// Database secret used as bearer token
    pub(crate) secret: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for FaunaClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FAUNA_ENDPOINT.to_string(),
            secret: None,
            user_agent: concat!("guijs-fauna/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for FaunaClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaunaClientConfig")
            .field("endpoint", &self.endpoint)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_base_delay", &self.retry_base_delay)
            .finish()
    }
}

impl FaunaClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query endpoint.
    ///
    /// Defaults to `https://db.fauna.com/`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the database secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set an optional database secret.
    #[must_use]
    pub fn with_optional_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret;
        self
    }

    /// Whether a database secret is configured.
    pub const fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
