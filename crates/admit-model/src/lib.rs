//! Data model definitions for the admissions migration pipeline.
//!
//! This crate is the single source of truth for the flat source layout
//! (expected CSV columns), the controlled value sets of the target document,
//! and the composite natural key used for deduplication.

pub mod columns;
pub mod enums;
pub mod key;

pub use columns::{EXPECTED_COLUMNS, expected_column_set};
pub use enums::{
    AdmissionType, BloodType, Gender, InsuranceProvider, MedicalCondition, Medication, TestResult,
};
pub use key::{NATURAL_KEY_COLUMNS, NATURAL_KEY_FIELDS, NaturalKey, UNIQUE_INDEX_NAME};
