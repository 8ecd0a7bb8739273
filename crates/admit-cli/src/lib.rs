//! Library surface of the admissions migration CLI.
//!
//! The binary wires these pieces to argument parsing; integration tests
//! drive the pipeline directly.

pub mod logging;
pub mod pipeline;
