//! Error types for the LTR client.

mod ltr_error;

pub use ltr_error::LtrError;
