//! Container setup and the deduplicated insertion loop.

use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use admit_ingest::CsvTable;
use admit_model::{NATURAL_KEY_FIELDS, UNIQUE_INDEX_NAME};
use admit_store::{Database, StoreError};

use crate::error::{LoadError, Result};
use crate::schema::{COLLECTION_NAME, admissions_schema};
use crate::transform::transform_rows;

/// What to do when the destination shape validator rejects a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RejectPolicy {
    /// Count the rejection, log a warning, continue with the next row.
    #[default]
    Skip,
    /// Terminate the run on the first rejection.
    Abort,
}

/// Load configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Destination collection name.
    pub collection: String,
    /// Shape-rejection handling.
    pub reject_policy: RejectPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            collection: COLLECTION_NAME.to_string(),
            reject_policy: RejectPolicy::default(),
        }
    }
}

/// Outcome of a load run.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Rows read from the source.
    pub row_count: usize,
    /// Documents accepted by the store.
    pub inserted: usize,
    /// Documents skipped on a natural-key conflict.
    pub duplicates: usize,
    /// Documents rejected by the shape validator (Skip policy only).
    pub rejected: usize,
    /// Documents present in the collection after the run.
    pub stored_total: usize,
}

/// Recreate the destination collection and load every source row into it.
///
/// The collection is dropped unconditionally if present, then created with
/// the admissions shape validator and the `unique_patient` compound index.
/// Documents are inserted one at a time in source row order, so the first
/// occurrence of any natural key always wins.
///
/// # Errors
///
/// Propagates store failures outside the two expected per-document
/// rejection modes, shape rejections under [`RejectPolicy::Abort`], and a
/// final-count mismatch.
pub fn load_documents(
    table: &CsvTable,
    database: &mut Database,
    options: &LoadOptions,
) -> Result<LoadReport> {
    let span = info_span!("load", database = %database.name(), collection = %options.collection);
    let _guard = span.enter();

    if database.drop_collection(&options.collection) {
        info!(collection = %options.collection, "existing collection dropped");
    }
    let collection = database.create_collection(&options.collection, admissions_schema())?;
    collection.create_unique_index(UNIQUE_INDEX_NAME, &NATURAL_KEY_FIELDS)?;

    let documents = transform_rows(table);
    debug!(rows = documents.len(), "rows transformed");

    let mut report = LoadReport {
        row_count: documents.len(),
        ..LoadReport::default()
    };
    for (row, document) in documents.into_iter().enumerate() {
        match collection.insert_one(document) {
            Ok(()) => report.inserted += 1,
            Err(StoreError::DuplicateKey { index }) => {
                report.duplicates += 1;
                debug!(row, index = %index, "duplicate key skipped");
            }
            Err(error @ StoreError::SchemaViolation { .. }) => match options.reject_policy {
                RejectPolicy::Skip => {
                    report.rejected += 1;
                    warn!(row, %error, "document rejected by destination schema");
                }
                RejectPolicy::Abort => {
                    return Err(LoadError::DocumentRejected { row, source: error });
                }
            },
            Err(error) => return Err(LoadError::Store(error)),
        }
    }

    report.stored_total = collection.count_documents();
    if report.stored_total != report.inserted {
        return Err(LoadError::CountMismatch {
            inserted: report.inserted,
            stored: report.stored_total,
        });
    }
    info!(
        rows = report.row_count,
        inserted = report.inserted,
        duplicates = report.duplicates,
        rejected = report.rejected,
        stored_total = report.stored_total,
        "load complete"
    );
    Ok(report)
}

/// The stored document for a given patient name, if any.
pub fn find_by_patient_name<'a>(
    database: &'a Database,
    collection: &str,
    name: &str,
) -> Option<&'a Value> {
    let collection = database.collection(collection).ok()?;
    collection.find_one(|document| {
        document["patient"]["name"]
            .as_str()
            .is_some_and(|candidate| candidate == name)
    })
}
