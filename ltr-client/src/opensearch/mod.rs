//! OpenSearch host binding for the LTR client.
//!
//! This module makes `opensearch::OpenSearch` an `LtrTransport`, so the
//! plugin operations can be attached to an existing client.

mod client;

pub use client::connect;
