//! LTR endpoint client implementation.
//!
//! This module provides the client for the Learning to Rank plugin API.
//! Every method builds one request and forwards it to the host transport.

use serde_json::Value;
use tracing::instrument;

use crate::errors::LtrError;
use crate::interfaces::LtrTransport;
use crate::types::{make_path, HttpMethod, ListParams, LtrRequest, LTR_ROOT};

/// Namespace under which the client is attached to a host.
pub const NAMESPACE: &str = "ltr";

const FEATURE_SET: &str = "_featureset";
const FEATURE: &str = "_feature";
const MODEL: &str = "_model";
const ADD_FEATURES: &str = "_addfeatures";
const CREATE_MODEL: &str = "_createmodel";
const CLEAR_CACHE: &str = "_clearcache";
const CACHE_STATS: &str = "_cachestats";

/// Attach the LTR operations to a transport-providing client.
///
/// # Example
///
/// ```ignore
/// use ltr_client::{opensearch, LtrClientConfig, LtrExt};
///
/// let client = opensearch::connect(&LtrClientConfig::from_env()?)?;
/// client.ltr().create_feature_store(None).await?;
/// let stores = client.ltr().list_feature_stores().await?;
/// ```
pub trait LtrExt: LtrTransport + Sized {
    /// Plugin operations bound to this client.
    fn ltr(&self) -> LtrClient<'_, Self> {
        LtrClient::new(self)
    }
}

impl<T: LtrTransport> LtrExt for T {}

/// Client for the Learning to Rank plugin API.
///
/// Holds nothing but a reference to the host transport. An omitted
/// `store` argument targets the default feature store.
pub struct LtrClient<'a, T: LtrTransport + ?Sized> {
    transport: &'a T,
}

impl<T: LtrTransport + ?Sized> Clone for LtrClient<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: LtrTransport + ?Sized> Copy for LtrClient<'_, T> {}

impl<'a, T: LtrTransport + ?Sized> LtrClient<'a, T> {
    /// Create a client on top of the given transport.
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    async fn send(&self, request: LtrRequest) -> Result<Value, LtrError> {
        self.transport.perform_request(request).await
    }

    async fn execute(&self, request: LtrRequest) -> Result<(), LtrError> {
        self.send(request).await.map(|_| ())
    }

    /// Create a feature store. `None` creates the default store.
    #[instrument(level = "debug", skip(self))]
    pub async fn create_feature_store(&self, store: Option<&str>) -> Result<(), LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store])?;
        self.execute(LtrRequest::new(HttpMethod::Put, path)).await
    }

    /// Delete a feature store with everything it holds.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_feature_store(&self, store: Option<&str>) -> Result<(), LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store])?;
        self.execute(LtrRequest::new(HttpMethod::Delete, path)).await
    }

    /// List all feature stores.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_feature_stores(&self) -> Result<Value, LtrError> {
        let path = make_path(&[Some(LTR_ROOT)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path)).await
    }

    /// Create a feature set from a feature set definition document.
    #[instrument(level = "debug", skip(self, body))]
    pub async fn create_feature_set(
        &self,
        name: &str,
        body: Value,
        store: Option<&str>,
    ) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE_SET), Some(name)])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Delete a feature set.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_feature_set(&self, name: &str, store: Option<&str>) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE_SET), Some(name)])?;
        self.execute(LtrRequest::new(HttpMethod::Delete, path)).await
    }

    /// Fetch a feature set definition.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_feature_set(&self, name: &str, store: Option<&str>) -> Result<Value, LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE_SET), Some(name)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path)).await
    }

    /// List feature sets, optionally filtered by name prefix.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_feature_sets(
        &self,
        store: Option<&str>,
        params: ListParams,
    ) -> Result<Value, LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE_SET)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path).with_params(params))
            .await
    }

    /// Append feature definitions to an existing feature set.
    ///
    /// The body holds the definitions under `features`.
    #[instrument(level = "debug", skip(self, body))]
    pub async fn add_features_to_feature_set(
        &self,
        name: &str,
        body: Value,
        store: Option<&str>,
    ) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[
            Some(LTR_ROOT),
            store,
            Some(FEATURE_SET),
            Some(name),
            Some(ADD_FEATURES),
        ])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Append an already stored feature to a feature set.
    #[instrument(level = "debug", skip(self))]
    pub async fn add_feature_to_feature_set(
        &self,
        name: &str,
        feature: &str,
        store: Option<&str>,
    ) -> Result<(), LtrError> {
        require("name", name)?;
        require("feature", feature)?;
        let path = make_path(&[
            Some(LTR_ROOT),
            store,
            Some(FEATURE_SET),
            Some(name),
            Some(ADD_FEATURES),
            Some(feature),
        ])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path)).await
    }

    /// Create a model on top of `feature_set`.
    ///
    /// The model name travels inside the body; `name` only identifies the
    /// call in logs.
    #[instrument(level = "debug", skip(self, body))]
    pub async fn create_model(
        &self,
        name: &str,
        body: Value,
        feature_set: &str,
        store: Option<&str>,
    ) -> Result<(), LtrError> {
        require("name", name)?;
        require("feature_set", feature_set)?;
        let path = make_path(&[
            Some(LTR_ROOT),
            store,
            Some(FEATURE_SET),
            Some(feature_set),
            Some(CREATE_MODEL),
        ])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Delete a model.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_model(&self, name: &str, store: Option<&str>) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(MODEL), Some(name)])?;
        self.execute(LtrRequest::new(HttpMethod::Delete, path)).await
    }

    /// Fetch a model definition.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_model(&self, name: &str, store: Option<&str>) -> Result<Value, LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(MODEL), Some(name)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path)).await
    }

    /// List models, optionally filtered by name prefix.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_models(
        &self,
        store: Option<&str>,
        params: ListParams,
    ) -> Result<Value, LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store, Some(MODEL)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path).with_params(params))
            .await
    }

    /// Create a feature from a feature definition document.
    #[instrument(level = "debug", skip(self, body))]
    pub async fn create_feature(
        &self,
        name: &str,
        body: Value,
        store: Option<&str>,
    ) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE), Some(name)])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path).with_body(body))
            .await
    }

    /// Delete a feature.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_feature(&self, name: &str, store: Option<&str>) -> Result<(), LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE), Some(name)])?;
        self.execute(LtrRequest::new(HttpMethod::Delete, path)).await
    }

    /// Fetch a feature definition.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_feature(&self, name: &str, store: Option<&str>) -> Result<Value, LtrError> {
        require("name", name)?;
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE), Some(name)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path)).await
    }

    /// List features, optionally filtered by name prefix.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_features(
        &self,
        store: Option<&str>,
        params: ListParams,
    ) -> Result<Value, LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store, Some(FEATURE)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path).with_params(params))
            .await
    }

    /// Clear the plugin's cache for a store.
    #[instrument(level = "debug", skip(self))]
    pub async fn clear_cache(&self, store: Option<&str>) -> Result<(), LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store, Some(CLEAR_CACHE)])?;
        self.execute(LtrRequest::new(HttpMethod::Post, path)).await
    }

    /// Fetch the plugin's cache statistics for a store.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_cache_stats(&self, store: Option<&str>) -> Result<Value, LtrError> {
        let path = make_path(&[Some(LTR_ROOT), store, Some(CACHE_STATS)])?;
        self.send(LtrRequest::new(HttpMethod::Get, path)).await
    }
}

/// Reject an empty required argument before anything is sent.
fn require(field: &str, value: &str) -> Result<(), LtrError> {
    if value.is_empty() {
        return Err(LtrError::validation(format!("{} is required", field)));
    }
    Ok(())
}
