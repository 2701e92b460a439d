//! Request descriptors for Learning to Rank plugin operations.

use serde::Serialize;
use serde_json::Value;

use crate::errors::LtrError;

/// Root path segment of every plugin endpoint.
pub const LTR_ROOT: &str = "_ltr";

/// HTTP method of a plugin endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name, as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Query parameters accepted by the list operations.
///
/// `prefix` filters the listed names server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl ListParams {
    /// Create empty list parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only list entries whose name starts with `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Check if any parameter is set.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none()
    }
}

/// A single request against the plugin API.
///
/// Built by [`LtrClient`](crate::LtrClient), handed to an
/// [`LtrTransport`](crate::LtrTransport) and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LtrRequest {
    /// HTTP method of the endpoint.
    pub method: HttpMethod,
    /// Absolute URL path, starting with `/_ltr`.
    pub path: String,
    /// Request document, forwarded unmodified.
    pub body: Option<Value>,
    /// Query string parameters, present only for list operations.
    pub params: Option<ListParams>,
}

impl LtrRequest {
    /// Create a request without body or query parameters.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            params: None,
        }
    }

    /// Attach a request document.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach query parameters. Empty parameters are dropped.
    pub fn with_params(mut self, params: ListParams) -> Self {
        self.params = if params.is_empty() { None } else { Some(params) };
        self
    }
}

/// Build an absolute URL path from optional segments.
///
/// `None` and empty segments are skipped, so an omitted store name falls
/// back to the default store. Segments are percent-encoded, keeping `,`
/// and `*` literal.
///
/// `.` and `..` are rejected: URL resolution would collapse them and the
/// request would address the parent resource instead.
pub fn make_path(segments: &[Option<&str>]) -> Result<String, LtrError> {
    let mut path = String::new();
    for segment in segments.iter().flatten().filter(|s| !s.is_empty()) {
        if *segment == "." || *segment == ".." {
            return Err(LtrError::validation(format!(
                "'{}' is not a valid name",
                segment
            )));
        }
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment)
        .replace("%2C", ",")
        .replace("%2A", "*")
}
