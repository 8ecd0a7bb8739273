//! In-memory representation of the raw tabular source.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A fully materialized CSV file: raw headers plus row-major string cells.
///
/// Cells are trimmed but otherwise untouched; coercion to dates and numbers
/// is a separate, per-consumer concern (the validator and the loader apply
/// different policies).
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a raw header, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == header)
    }

    /// Cell value by row and raw header name; empty string when absent.
    pub fn cell<'a>(&'a self, row: usize, header: &str) -> &'a str {
        let Some(idx) = self.column_index(header) else {
            return "";
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Normalize a header for document field access: trim, lowercase, and
/// replace whitespace runs with underscores ("Date of Admission" becomes
/// "date_of_admission").
pub fn normalize_column_name(raw: &str) -> String {
    normalize_header(raw)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Read a delimited text file into a [`CsvTable`].
///
/// The first non-empty record is taken as the header row; subsequent records
/// are padded or truncated to the header width. Fully empty records are
/// skipped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for idx in 0..header_row.len() {
                    let value = record.get(idx).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                rows.push(row);
            }
        }
    }

    let headers = headers.ok_or_else(|| IngestError::EmptyCsv {
        path: path.to_path_buf(),
    })?;
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv table loaded"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Date of Admission"), "date_of_admission");
        assert_eq!(normalize_column_name("  Blood  Type "), "blood_type");
        assert_eq!(normalize_column_name("Name"), "name");
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Name"), "Name");
    }
}
