use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use ltr_client::{ListParams, LtrClient, LtrTransport};
use serde_json::Value;
use tracing::info;

use crate::cli::Commands;

/// Read a JSON request document from a file, or stdin for `-`.
pub fn read_body(path: &Path) -> Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read body from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read body file {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn list_params(prefix: Option<String>) -> ListParams {
    match prefix {
        Some(prefix) => ListParams::new().with_prefix(prefix),
        None => ListParams::new(),
    }
}

/// Run one command. Read operations return the response document.
pub async fn execute<T: LtrTransport + ?Sized>(
    ltr: LtrClient<'_, T>,
    store: Option<&str>,
    command: Commands,
) -> Result<Option<Value>> {
    let response = match command {
        Commands::CreateFeatureStore => {
            ltr.create_feature_store(store).await?;
            info!(store = store.unwrap_or("_default_"), "Feature store created");
            None
        }
        Commands::DeleteFeatureStore => {
            ltr.delete_feature_store(store).await?;
            info!(store = store.unwrap_or("_default_"), "Feature store deleted");
            None
        }
        Commands::ListFeatureStores => Some(ltr.list_feature_stores().await?),

        Commands::CreateFeatureSet { name, body } => {
            let body = read_body(&body)?;
            ltr.create_feature_set(&name, body, store).await?;
            info!(feature_set = %name, "Feature set created");
            None
        }
        Commands::DeleteFeatureSet { name } => {
            ltr.delete_feature_set(&name, store).await?;
            info!(feature_set = %name, "Feature set deleted");
            None
        }
        Commands::GetFeatureSet { name } => Some(ltr.get_feature_set(&name, store).await?),
        Commands::ListFeatureSets { prefix } => {
            Some(ltr.list_feature_sets(store, list_params(prefix)).await?)
        }
        Commands::AddFeatures { name, body } => {
            let body = read_body(&body)?;
            ltr.add_features_to_feature_set(&name, body, store).await?;
            info!(feature_set = %name, "Features added");
            None
        }
        Commands::AddFeature { name, feature } => {
            ltr.add_feature_to_feature_set(&name, &feature, store).await?;
            info!(feature_set = %name, feature = %feature, "Feature added");
            None
        }

        Commands::CreateModel {
            name,
            feature_set,
            body,
        } => {
            let body = read_body(&body)?;
            ltr.create_model(&name, body, &feature_set, store).await?;
            info!(model = %name, feature_set = %feature_set, "Model created");
            None
        }
        Commands::DeleteModel { name } => {
            ltr.delete_model(&name, store).await?;
            info!(model = %name, "Model deleted");
            None
        }
        Commands::GetModel { name } => Some(ltr.get_model(&name, store).await?),
        Commands::ListModels { prefix } => Some(ltr.list_models(store, list_params(prefix)).await?),

        Commands::CreateFeature { name, body } => {
            let body = read_body(&body)?;
            ltr.create_feature(&name, body, store).await?;
            info!(feature = %name, "Feature created");
            None
        }
        Commands::DeleteFeature { name } => {
            ltr.delete_feature(&name, store).await?;
            info!(feature = %name, "Feature deleted");
            None
        }
        Commands::GetFeature { name } => Some(ltr.get_feature(&name, store).await?),
        Commands::ListFeatures { prefix } => {
            Some(ltr.list_features(store, list_params(prefix)).await?)
        }

        Commands::ClearCache => {
            ltr.clear_cache(store).await?;
            info!(store = store.unwrap_or("_default_"), "Cache cleared");
            None
        }
        Commands::CacheStats => Some(ltr.get_cache_stats(store).await?),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ltr_client::{HttpMethod, LtrError, LtrExt, LtrRequest};
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock transport for testing
    struct MockTransport {
        requests: Arc<Mutex<Vec<LtrRequest>>>,
        response: Value,
    }

    impl MockTransport {
        fn new(response: Value) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                response,
            }
        }
    }

    #[async_trait]
    impl LtrTransport for MockTransport {
        async fn perform_request(&self, request: LtrRequest) -> Result<Value, LtrError> {
            self.requests.lock().await.push(request);
            Ok(self.response.clone())
        }
    }

    fn body_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_body() {
        let file = body_file(r#"{"featureset": {"features": []}}"#);
        assert_eq!(
            read_body(file.path()).unwrap(),
            json!({"featureset": {"features": []}})
        );
    }

    #[test]
    fn test_read_body_errors() {
        let file = body_file("{not json");
        assert!(read_body(file.path()).is_err());
        assert!(read_body(&PathBuf::from("/nonexistent/body.json")).is_err());
    }

    #[tokio::test]
    async fn test_read_command_returns_response() {
        let transport = MockTransport::new(json!({"stores": {}}));

        let response = execute(transport.ltr(), None, Commands::ListFeatureStores)
            .await
            .unwrap();

        assert_eq!(response, Some(json!({"stores": {}})));
    }

    #[tokio::test]
    async fn test_write_command_sends_body_to_store() {
        let transport = MockTransport::new(json!({"acknowledged": true}));
        let file = body_file(r#"{"feature": {"name": "ctr"}}"#);

        let response = execute(
            transport.ltr(),
            Some("fs"),
            Commands::CreateFeature {
                name: "ctr".to_string(),
                body: file.path().to_path_buf(),
            },
        )
        .await
        .unwrap();

        assert!(response.is_none());
        let requests = transport.requests.lock().await;
        assert_eq!(
            requests[0],
            LtrRequest::new(HttpMethod::Post, "/_ltr/fs/_feature/ctr")
                .with_body(json!({"feature": {"name": "ctr"}}))
        );
    }

    #[tokio::test]
    async fn test_list_command_forwards_prefix() {
        let transport = MockTransport::new(json!({"hits": {}}));

        execute(
            transport.ltr(),
            None,
            Commands::ListModels {
                prefix: Some("linear".to_string()),
            },
        )
        .await
        .unwrap();

        let requests = transport.requests.lock().await;
        assert_eq!(requests[0].path, "/_ltr/_model");
        assert_eq!(requests[0].params, Some(ListParams::new().with_prefix("linear")));
    }

    #[tokio::test]
    async fn test_invalid_body_sends_nothing() {
        let transport = MockTransport::new(Value::Null);
        let file = body_file("[");

        let result = execute(
            transport.ltr(),
            None,
            Commands::CreateFeatureSet {
                name: "foo".to_string(),
                body: file.path().to_path_buf(),
            },
        )
        .await;

        assert!(result.is_err());
        assert!(transport.requests.lock().await.is_empty());
    }
}
