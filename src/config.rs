//! Client configuration options.

use std::time::Duration;

use crate::constants::{API_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Configuration for [`StockalClient`](crate::client::StockalClient).
///
/// Built from defaults with zero or more `with_*` overrides. Overrides
/// compose left-to-right; later calls win on conflicting fields.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stockal_rs::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for REST API requests.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL. Useful for testing against a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom request timeout.
    ///
    /// The timeout must be a positive duration; a zero timeout is rejected
    /// when the client is constructed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
