//! LTR client error types.
//!
//! Server-side failures are not translated: the status code and the error
//! body returned by the cluster are carried as-is in [`LtrError::Api`].

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while calling the Learning to Rank plugin API.
#[derive(Error, Debug)]
pub enum LtrError {
    /// A required argument was missing or empty.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to build the underlying search engine client.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The transport failed before a response status was received.
    #[error("Transport error: {0}")]
    TransportError(#[from] opensearch::Error),

    /// The cluster answered with a non-success status code.
    #[error("Request failed with status {status}: {body}")]
    Api {
        /// HTTP status code returned by the cluster.
        status: u16,
        /// Error body as returned by the cluster, JSON-parsed when possible.
        body: Value,
    },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl LtrError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an API error from a status code and response body.
    pub fn api(status: u16, body: Value) -> Self {
        Self::Api { status, body }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// HTTP status code of the failed request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::TransportError(e) => e.status_code().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The addressed store, feature set, feature or model does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The resource being created already exists.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}
