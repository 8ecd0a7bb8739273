//! Column completeness check.

use admit_ingest::CsvTable;
use admit_model::{EXPECTED_COLUMNS, expected_column_set};

/// Compare the file's header against the expected 15-column layout.
///
/// Returns `(missing, unexpected)`: expected columns absent from the file,
/// and file columns outside the expected set. Both are advisory.
pub fn check(table: &CsvTable) -> (Vec<String>, Vec<String>) {
    let expected = expected_column_set();
    let missing = EXPECTED_COLUMNS
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    let unexpected = table
        .headers
        .iter()
        .filter(|name| !expected.contains(name.as_str()))
        .cloned()
        .collect();
    (missing, unexpected)
}
