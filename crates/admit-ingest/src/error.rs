//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse the file as delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File parsed but contains no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/medical_data.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/medical_data.csv");
    }
}
