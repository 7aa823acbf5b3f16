//! Static configuration of the Braintree adapter.

use std::fmt;
use std::time::Duration;

/// Braintree GraphQL API version sent with every request.
pub const DEFAULT_API_VERSION: &str = "2020-05-24";

/// Wall-clock limit applied to every call to the PSP.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

/// Errors raised while building a gateway from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid Braintree API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Connection settings for the Braintree GraphQL API.
#[derive(Clone)]
pub struct BraintreeConfig {
    pub api_url: String,
    /// Pre-formatted credential placed after `Basic ` in the Authorization header.
    pub api_key: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl BraintreeConfig {
    /// Creates a configuration with the default API version and timeout.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the `Braintree-Version` header value.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Overrides the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for BraintreeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BraintreeConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
