//! Duplicate-key census over the five-field natural key.
//!
//! This census only predicts what the loader's insert-time dedup will do;
//! the authoritative decision is the store's unique index.

use std::collections::BTreeMap;

use admit_ingest::CsvTable;
use admit_model::{NATURAL_KEY_COLUMNS, NaturalKey};

use crate::report::DuplicateCensus;

const MAX_SAMPLE_KEYS: usize = 5;

/// Count duplicate rows by natural key.
///
/// Returns `None` when any key column is missing from the file, in which
/// case the census cannot be taken.
pub fn check(table: &CsvTable) -> Option<DuplicateCensus> {
    if NATURAL_KEY_COLUMNS
        .iter()
        .any(|column| table.column_index(column).is_none())
    {
        return None;
    }

    // Group sizes in first-occurrence order.
    let mut groups: BTreeMap<NaturalKey, usize> = BTreeMap::new();
    let mut order: Vec<NaturalKey> = Vec::new();
    for row_idx in 0..table.rows.len() {
        let key = row_key(table, row_idx);
        let count = groups.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    let unique_keys = groups.len();
    let dup_total: usize = groups.values().filter(|count| **count >= 2).sum();
    let dup_ignored = table.rows.len() - unique_keys;
    let sample_keys = order
        .iter()
        .filter(|key| groups[*key] >= 2)
        .take(MAX_SAMPLE_KEYS)
        .cloned()
        .collect();

    Some(DuplicateCensus {
        dup_total,
        dup_ignored,
        unique_keys,
        sample_keys,
    })
}

fn row_key(table: &CsvTable, row_idx: usize) -> NaturalKey {
    NaturalKey::new(
        table.cell(row_idx, "Name"),
        table.cell(row_idx, "Age"),
        table.cell(row_idx, "Gender"),
        table.cell(row_idx, "Blood Type"),
        table.cell(row_idx, "Date of Admission"),
    )
}
