//! Configuration types for connecting the host search engine client.

use std::env;
use std::time::Duration;

use crate::errors::LtrError;

/// Default search engine URL.
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Configuration for the OpenSearch client the LTR add-on is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LtrClientConfig {
    /// Cluster URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Basic auth user name.
    pub username: Option<String>,
    /// Basic auth password. Only used together with `username`.
    pub password: Option<String>,
    /// Per-request timeout applied by the transport.
    /// Set to None to use the transport's default.
    pub timeout: Option<Duration>,
}

impl Default for LtrClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            username: None,
            password: None,
            timeout: None,
        }
    }
}

impl LtrClientConfig {
    /// Create a config pointing at the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: cluster URL (default: http://localhost:9200)
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: basic auth credentials
    /// - `LTR_REQUEST_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Result<Self, LtrError> {
        let url = env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let username = env::var("OPENSEARCH_USERNAME").ok().filter(|v| !v.is_empty());
        let password = env::var("OPENSEARCH_PASSWORD").ok();
        let timeout = match env::var("LTR_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            url,
            username,
            password,
            timeout,
        })
    }

    /// Set basic auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, LtrError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| {
            LtrError::validation(format!("Invalid LTR_REQUEST_TIMEOUT_SECS '{}': {}", raw, e))
        })
}
