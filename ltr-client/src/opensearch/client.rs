//! OpenSearch transport implementation.
//!
//! This module provides the concrete implementation of `LtrTransport`
//! using the OpenSearch Rust client as the host.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::{
        headers::HeaderMap,
        request::JsonBody,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        Method,
    },
    OpenSearch,
};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::LtrClientConfig;
use crate::errors::LtrError;
use crate::interfaces::LtrTransport;
use crate::types::{HttpMethod, LtrRequest};

/// Create an OpenSearch client for the configured cluster.
///
/// The LTR add-on does not own this client: callers that already have an
/// `OpenSearch` instance can attach to it directly with
/// [`LtrExt::ltr`](crate::LtrExt::ltr).
///
/// # Returns
///
/// * `Ok(OpenSearch)` - A new client instance
/// * `Err(LtrError)` - If the URL is invalid or transport setup fails
pub fn connect(config: &LtrClientConfig) -> Result<OpenSearch, LtrError> {
    let parsed_url = Url::parse(&config.url).map_err(|e| LtrError::connection(e.to_string()))?;

    let conn_pool = SingleNodeConnectionPool::new(parsed_url);
    let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

    if let Some(ref username) = config.username {
        let password = config.password.clone().unwrap_or_default();
        builder = builder.auth(Credentials::Basic(username.clone(), password));
    }
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    let transport = builder
        .build()
        .map_err(|e| LtrError::connection(e.to_string()))?;

    info!(
        url = %config.url,
        authenticated = config.username.is_some(),
        "Created OpenSearch client"
    );

    Ok(OpenSearch::new(transport))
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::Get,
        HttpMethod::Put => Method::Put,
        HttpMethod::Post => Method::Post,
        HttpMethod::Delete => Method::Delete,
    }
}

/// Parse a response body, mapping an empty body to `Value::Null`.
fn parse_body(text: &str) -> Result<Value, LtrError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| LtrError::parse(e.to_string()))
}

/// Parse an error body, keeping non-JSON bodies as a plain string.
fn parse_error_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl LtrTransport for OpenSearch {
    async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError> {
        let LtrRequest {
            method,
            path,
            body,
            params,
        } = request;

        debug!(
            method = method.as_str(),
            path = %path,
            has_body = body.is_some(),
            "Sending LTR request"
        );

        let response = self
            .send(
                to_method(method),
                &path,
                HeaderMap::new(),
                params.as_ref(),
                body.map(JsonBody::new),
                None,
            )
            .await?;

        let status = response.status_code();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                method = method.as_str(),
                path = %path,
                status = %status,
                "LTR request failed"
            );
            return Err(LtrError::api(status.as_u16(), parse_error_body(text)));
        }

        debug!(path = %path, status = %status, "LTR request succeeded");
        parse_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
        assert_eq!(
            parse_body(r#"{"acknowledged":true}"#).unwrap(),
            json!({"acknowledged": true})
        );
        assert!(matches!(
            parse_body("{not json"),
            Err(LtrError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_error_body() {
        assert_eq!(
            parse_error_body(r#"{"error":{"type":"resource_not_found_exception"}}"#.to_string()),
            json!({"error": {"type": "resource_not_found_exception"}})
        );
        assert_eq!(
            parse_error_body("Bad Gateway".to_string()),
            json!("Bad Gateway")
        );
    }

    #[test]
    fn test_connect_rejects_invalid_url() {
        let result = connect(&LtrClientConfig::new("not a url"));
        assert!(matches!(result, Err(LtrError::ConnectionError(_))));
    }

    #[test]
    fn test_connect_valid_url() {
        let config = LtrClientConfig::new("http://localhost:9200")
            .with_credentials("admin", "admin")
            .with_timeout(std::time::Duration::from_secs(10));
        assert!(connect(&config).is_ok());
    }
}
