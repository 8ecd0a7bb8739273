//! Missing-value census.

use std::collections::BTreeMap;

use admit_ingest::CsvTable;

/// Count empty cells per column, reporting only columns with a non-zero
/// count.
pub fn check(table: &CsvTable) -> BTreeMap<String, usize> {
    let mut census = BTreeMap::new();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let empty = table
            .rows
            .iter()
            .filter(|row| row.get(col_idx).map(String::as_str).unwrap_or("").is_empty())
            .count();
        if empty > 0 {
            census.insert(header.clone(), empty);
        }
    }
    census
}
