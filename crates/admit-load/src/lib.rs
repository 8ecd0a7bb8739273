//! Document loader for the admissions migration pipeline.
//!
//! Consumes the raw CSV table (after the integrity gate has passed),
//! recreates the destination collection with its shape validator and
//! natural-key unique index, transforms rows into nested documents, and
//! inserts them one at a time, counting inserted, duplicate, and rejected
//! documents separately.

pub mod error;
pub mod load;
pub mod schema;
pub mod transform;

pub use error::{LoadError, Result};
pub use load::{LoadOptions, LoadReport, RejectPolicy, find_by_patient_name, load_documents};
pub use schema::{COLLECTION_NAME, DATABASE_NAME, admissions_schema};
pub use transform::transform_rows;
