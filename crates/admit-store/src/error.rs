//! Error types for the document store.

use thiserror::Error;

/// Errors raised by store operations.
///
/// `SchemaViolation` and `DuplicateKey` are the two expected per-document
/// failure modes at insert time; everything else is a setup or connection
/// problem.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection string did not parse.
    #[error("invalid connection string '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Connection retry budget exhausted.
    #[error("store unreachable after {attempts} attempts")]
    ConnectionExhausted { attempts: u32 },

    /// Attempted to create a collection that already exists.
    #[error("collection '{name}' already exists")]
    CollectionExists { name: String },

    /// Operation addressed a collection that does not exist.
    #[error("unknown collection '{name}'")]
    UnknownCollection { name: String },

    /// Document rejected by the collection's shape validator.
    #[error("document failed schema validation at '{path}': {reason}")]
    SchemaViolation { path: String, reason: String },

    /// Document rejected by a unique index.
    #[error("duplicate key for index '{index}'")]
    DuplicateKey { index: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
