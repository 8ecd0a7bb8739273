//! Embedded schema-enforcing document store.
//!
//! The store keeps documents in memory for the duration of a migration run:
//! a [`StoreClient`] owns named [`Database`]s, each holding [`Collection`]s
//! that validate every inserted document against a declared
//! [`DocumentSchema`] and optionally enforce a compound unique index. The
//! two insert-time rejections have distinct error kinds so callers can
//! treat duplicates and shape failures differently.

pub mod client;
pub mod collection;
pub mod config;
pub mod database;
pub mod error;
pub mod redact;
pub mod schema;
pub mod validator;

pub use client::StoreClient;
pub use collection::{Collection, UniqueIndex};
pub use config::StoreConfig;
pub use database::Database;
pub use error::{Result, StoreError};
pub use redact::{REDACTED_VALUE, redact_value, set_value_logging};
pub use schema::{DocumentSchema, FieldDef, FieldType};
pub use validator::validate_document;
