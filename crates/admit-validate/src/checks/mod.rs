//! Individual integrity checks, one module per concern.
//!
//! Checks never fail; each inspects the loaded table and contributes its
//! findings to the report.

pub mod columns;
pub mod datatype;
pub mod duplicates;
pub mod missing;
