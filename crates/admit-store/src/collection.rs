//! Collections: shape-validated document containers with unique indexes.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::schema::DocumentSchema;
use crate::validator::validate_document;

/// A named compound unique index over dotted field paths.
#[derive(Debug, Clone)]
pub struct UniqueIndex {
    name: String,
    fields: Vec<String>,
    seen: BTreeSet<String>,
}

impl UniqueIndex {
    fn new(name: &str, fields: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            fields: fields.iter().map(|field| (*field).to_string()).collect(),
            seen: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Canonical composite key for a document: the JSON encoding of the
    /// extracted field values in index order. Missing paths extract as null.
    fn key_for(&self, document: &Value) -> String {
        let values: Vec<&Value> = self
            .fields
            .iter()
            .map(|path| lookup_path(document, path))
            .collect();
        serde_json::to_string(&values).unwrap_or_default()
    }
}

/// Resolve a dotted path inside a document, yielding null for missing steps.
fn lookup_path<'a>(document: &'a Value, path: &str) -> &'a Value {
    let mut current = document;
    for step in path.split('.') {
        match current.get(step) {
            Some(value) => current = value,
            None => return &Value::Null,
        }
    }
    current
}

/// A document container with a shape validator attached at creation.
///
/// Documents are kept in insertion order; there is no update or delete
/// surface, matching the one-generation-per-run lifecycle of the migration.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    schema: DocumentSchema,
    unique_index: Option<UniqueIndex>,
    documents: Vec<Value>,
}

impl Collection {
    pub(crate) fn new(name: &str, schema: DocumentSchema) -> Self {
        Self {
            name: name.to_string(),
            schema,
            unique_index: None,
            documents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a named compound unique index over the given dotted paths.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if existing documents already
    /// collide under the new index.
    pub fn create_unique_index(&mut self, name: &str, fields: &[&str]) -> Result<()> {
        let mut index = UniqueIndex::new(name, fields);
        for document in &self.documents {
            if !index.seen.insert(index.key_for(document)) {
                return Err(StoreError::DuplicateKey {
                    index: name.to_string(),
                });
            }
        }
        debug!(collection = %self.name, index = name, fields = ?fields, "unique index created");
        self.unique_index = Some(index);
        Ok(())
    }

    /// Insert a single document.
    ///
    /// The shape validator runs first; the unique index check runs second.
    /// Both rejections leave the collection untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::SchemaViolation`] or [`StoreError::DuplicateKey`].
    pub fn insert_one(&mut self, document: Value) -> Result<()> {
        validate_document(&self.schema, &document)?;
        if let Some(index) = &mut self.unique_index {
            let key = index.key_for(&document);
            if index.seen.contains(&key) {
                return Err(StoreError::DuplicateKey {
                    index: index.name.clone(),
                });
            }
            index.seen.insert(key);
        }
        self.documents.push(document);
        Ok(())
    }

    /// Total number of documents currently stored.
    pub fn count_documents(&self) -> usize {
        self.documents.len()
    }

    /// Stored documents in insertion order.
    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    /// First stored document matching `predicate`.
    pub fn find_one(&self, predicate: impl Fn(&Value) -> bool) -> Option<&Value> {
        self.documents.iter().find(|document| predicate(document))
    }
}
