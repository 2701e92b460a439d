//! # LTR Client
//!
//! This crate exposes the REST API of the Learning to Rank search plugin
//! as an add-on attached to an existing search engine client. It includes
//! the endpoint catalog, the transport trait it dispatches through, and
//! the binding for the OpenSearch client.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use client::{LtrClient, LtrExt, NAMESPACE};
pub use config::LtrClientConfig;
pub use errors::LtrError;
pub use interfaces::LtrTransport;
pub use types::{HttpMethod, ListParams, LtrRequest};
