//! Error types for the integrity validator.

use thiserror::Error;

use admit_ingest::IngestError;

/// Errors that abort the integrity check.
///
/// Only loadability is fatal here; every other finding lands in the report
/// as an advisory entry. `GateRejected` is produced by an explicit policy,
/// never by the default configuration.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The source file is missing or unparseable as tabular data.
    #[error("failed to load source file: {0}")]
    SourceUnloadable(#[from] IngestError),

    /// A configured gate policy rejected an otherwise loadable file.
    #[error("integrity gate rejected the source: {reason}")]
    GateRejected { reason: String },
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
