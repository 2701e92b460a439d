use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ltr")]
#[command(about = "Manage Learning to Rank feature stores, features and models", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Cluster URL (overrides OPENSEARCH_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Feature store to operate on (the default store when omitted)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Create a feature store
    CreateFeatureStore,
    /// Delete a feature store and everything in it
    DeleteFeatureStore,
    /// List feature stores
    ListFeatureStores,

    /// Create a feature set from a definition document
    CreateFeatureSet {
        name: String,
        /// JSON document file, `-` for stdin
        #[arg(long)]
        body: PathBuf,
    },
    DeleteFeatureSet {
        name: String,
    },
    GetFeatureSet {
        name: String,
    },
    ListFeatureSets {
        /// Only list names starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Append feature definitions to a feature set
    AddFeatures {
        name: String,
        /// JSON document file, `-` for stdin
        #[arg(long)]
        body: PathBuf,
    },
    /// Append a stored feature to a feature set
    AddFeature {
        name: String,
        feature: String,
    },

    /// Create a model from a feature set
    CreateModel {
        name: String,
        #[arg(long)]
        feature_set: String,
        /// JSON document file, `-` for stdin
        #[arg(long)]
        body: PathBuf,
    },
    DeleteModel {
        name: String,
    },
    GetModel {
        name: String,
    },
    ListModels {
        /// Only list names starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Create a feature from a definition document
    CreateFeature {
        name: String,
        /// JSON document file, `-` for stdin
        #[arg(long)]
        body: PathBuf,
    },
    DeleteFeature {
        name: String,
    },
    GetFeature {
        name: String,
    },
    ListFeatures {
        /// Only list names starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Clear the plugin cache
    ClearCache,
    /// Show plugin cache statistics
    CacheStats,
}
