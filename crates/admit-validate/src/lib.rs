//! Integrity validator for the admissions migration pipeline.
//!
//! Given the path to the source CSV, [`run_integrity_check`] produces a
//! structured [`IntegrityReport`]. Only an unloadable file is an error; all
//! other findings (column gaps, soft type mismatches, missing values,
//! duplicate keys) are advisory entries in the report. The validator never
//! touches the destination store.

pub mod checks;
pub mod error;
pub mod report;

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use admit_ingest::read_csv_table;

pub use crate::error::{Result, ValidateError};
pub use crate::report::{DuplicateCensus, GatePolicy, IntegrityReport, TypeIssue};

/// Run all integrity checks against the file at `path`.
///
/// # Errors
///
/// Returns [`ValidateError::SourceUnloadable`] when the file is missing or
/// cannot be parsed as tabular data. No further checks run in that case.
pub fn run_integrity_check(path: &Path) -> Result<IntegrityReport> {
    let span = info_span!("integrity_check", source_file = %path.display());
    let _guard = span.enter();

    let table = read_csv_table(path)?;

    let (missing_columns, unexpected_columns) = checks::columns::check(&table);
    if !missing_columns.is_empty() {
        warn!(columns = ?missing_columns, "expected columns missing");
    }
    if !unexpected_columns.is_empty() {
        debug!(columns = ?unexpected_columns, "unexpected columns present");
    }

    let type_issues = checks::datatype::check(&table);
    for issue in &type_issues {
        warn!(
            column = %issue.column,
            expected = issue.expected,
            non_conforming = issue.non_conforming,
            "soft type mismatch"
        );
    }

    let missing_values = checks::missing::check(&table);
    for (column, count) in &missing_values {
        debug!(column = %column, empty_cells = count, "missing values");
    }

    let duplicates = checks::duplicates::check(&table);
    match &duplicates {
        Some(census) if census.dup_total > 0 => {
            warn!(
                dup_total = census.dup_total,
                dup_ignored = census.dup_ignored,
                unique_keys = census.unique_keys,
                "duplicate natural keys detected"
            );
        }
        Some(_) => {}
        None => warn!("duplicate census skipped: natural key columns incomplete"),
    }

    let report = IntegrityReport {
        row_count: table.rows.len(),
        column_count: table.headers.len(),
        missing_columns,
        unexpected_columns,
        type_issues,
        missing_values,
        duplicates,
    };
    info!(
        rows = report.row_count,
        columns = report.column_count,
        clean = report.is_clean(),
        "integrity check complete"
    );
    Ok(report)
}
