//! CSV ingestion for the admissions migration pipeline.

pub mod coerce;
pub mod csv_table;
pub mod error;

pub use coerce::{parse_date, parse_f64, parse_i64};
pub use csv_table::{CsvTable, normalize_column_name, read_csv_table};
pub use error::{IngestError, Result};
