//! Request transport trait definition.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::LtrError;
use crate::types::LtrRequest;

/// Executes plugin requests on behalf of [`LtrClient`](crate::LtrClient).
///
/// The host search engine client implements this trait; connection
/// management, authentication and serialization stay on its side. A mock
/// implementation can be swapped in for testing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// Non-success HTTP statuses must surface as [`LtrError::Api`] with the
/// status code and body untouched. Implementations must not retry.
#[async_trait]
pub trait LtrTransport: Send + Sync {
    /// Send one request and return the parsed response body.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The response document, `Value::Null` for an empty body
    /// * `Err(LtrError)` - If the request failed or the server rejected it
    async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError>;
}

#[async_trait]
impl<T: LtrTransport + ?Sized> LtrTransport for &T {
    async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError> {
        (**self).perform_request(request).await
    }
}

#[async_trait]
impl<T: LtrTransport + ?Sized> LtrTransport for Box<T> {
    async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError> {
        (**self).perform_request(request).await
    }
}

#[async_trait]
impl<T: LtrTransport + ?Sized> LtrTransport for Arc<T> {
    async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError> {
        (**self).perform_request(request).await
    }
}
