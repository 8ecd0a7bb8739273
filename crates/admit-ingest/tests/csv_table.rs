//! Integration tests for CSV table reading.

use std::io::Write;

use admit_ingest::{IngestError, read_csv_table};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_basic_table() {
    let file = write_csv("Name,Age,Gender\nJane Doe,30,Female\nJohn Roe,45,Male\n");
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.headers, vec!["Name", "Age", "Gender"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, "Name"), "Jane Doe");
    assert_eq!(table.cell(1, "Age"), "45");
}

#[test]
fn test_short_rows_are_padded() {
    let file = write_csv("Name,Age,Gender\nJane Doe,30\n");
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.rows[0], vec!["Jane Doe", "30", ""]);
    assert_eq!(table.cell(0, "Gender"), "");
}

#[test]
fn test_cells_are_trimmed() {
    let file = write_csv("Name,Age\n  Jane Doe  , 30 \n");
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.cell(0, "Name"), "Jane Doe");
    assert_eq!(table.cell(0, "Age"), "30");
}

#[test]
fn test_missing_file() {
    let err = read_csv_table(std::path::Path::new("/no/such/file.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn test_empty_file() {
    let file = write_csv("");
    let err = read_csv_table(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn test_unknown_column_access() {
    let file = write_csv("Name\nJane Doe\n");
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.cell(0, "Hospital"), "");
    assert!(table.column_index("Hospital").is_none());
}
