//! Client configuration for the HTTP transport.

use std::time::Duration;

use crate::error::{TransportError, TransportResult};

/// Configuration for connecting to the authorization service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the service (e.g., "https://fga.example.com").
    pub api_url: String,
    /// Optional bearer token sent with every request.
    pub api_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            api_token: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("fgalink/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Sets the bearer token sent with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TransportResult<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(TransportError::InvalidConfig {
                message: format!("api_url must be an http(s) URL, got: {}", self.api_url),
            });
        }
        if self.timeout.is_zero() {
            return Err(TransportError::InvalidConfig {
                message: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
