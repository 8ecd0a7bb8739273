//! Soft type conformance check.
//!
//! Age and Billing Amount must be interpretable as numeric, Date of
//! Admission as a calendar date. Empty cells are not type errors; they are
//! the missing-value census's concern.

use admit_ingest::{CsvTable, parse_date, parse_f64};

use crate::report::TypeIssue;

const MAX_SAMPLES: usize = 5;

/// Check the three typed columns, skipping any that are absent.
pub fn check(table: &CsvTable) -> Vec<TypeIssue> {
    let mut issues = Vec::new();
    collect(table, "Age", "numeric", |value| parse_f64(value).is_some(), &mut issues);
    collect(
        table,
        "Billing Amount",
        "numeric",
        |value| parse_f64(value).is_some(),
        &mut issues,
    );
    collect(
        table,
        "Date of Admission",
        "date",
        |value| parse_date(value).is_some(),
        &mut issues,
    );
    issues
}

fn collect(
    table: &CsvTable,
    column: &str,
    expected: &'static str,
    conforms: impl Fn(&str) -> bool,
    issues: &mut Vec<TypeIssue>,
) {
    let Some(col_idx) = table.column_index(column) else {
        return;
    };
    let mut non_conforming = 0u64;
    let mut samples = Vec::new();
    for row in &table.rows {
        let value = row.get(col_idx).map(String::as_str).unwrap_or("");
        if value.is_empty() {
            continue;
        }
        if !conforms(value) {
            non_conforming += 1;
            if samples.len() < MAX_SAMPLES {
                samples.push(value.to_string());
            }
        }
    }
    if non_conforming > 0 {
        issues.push(TypeIssue {
            column: column.to_string(),
            expected,
            non_conforming,
            samples,
        });
    }
}
