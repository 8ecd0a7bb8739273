//! Error types for the document loader.

use thiserror::Error;

use admit_store::StoreError;

/// Errors that terminate a load run.
///
/// Duplicate-key rejections are never errors here; they are counted and
/// skipped. Shape rejections become `DocumentRejected` only under
/// [`crate::RejectPolicy::Abort`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// A store operation failed outside the two expected per-document
    /// rejection modes.
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    /// A document failed the destination shape validator and the
    /// configured policy aborts on rejection.
    #[error("row {row} rejected by destination schema: {source}")]
    DocumentRejected {
        row: usize,
        #[source]
        source: StoreError,
    },

    /// The post-load count query disagreed with the insert counter.
    #[error("store count {stored} does not match inserted count {inserted}")]
    CountMismatch { inserted: usize, stored: usize },
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;
