//! Interface definitions for the request transport.
//!
//! The `LtrTransport` trait is the seam between the endpoint catalog and
//! the host search engine client that actually executes requests.

mod ltr_transport;

pub use ltr_transport::LtrTransport;
