//! Databases: named groups of collections.

use std::collections::BTreeMap;

use tracing::debug;

use crate::collection::Collection;
use crate::error::{Result, StoreError};
use crate::schema::DocumentSchema;

/// A named database holding collections.
#[derive(Debug, Clone, Default)]
pub struct Database {
    name: String,
    collections: BTreeMap<String, Collection>,
}

impl Database {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            collections: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of existing collections, sorted.
    pub fn list_collection_names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Drop a collection and everything in it. Returns true if it existed.
    pub fn drop_collection(&mut self, name: &str) -> bool {
        let existed = self.collections.remove(name).is_some();
        if existed {
            debug!(database = %self.name, collection = name, "collection dropped");
        }
        existed
    }

    /// Create a collection with a shape validator attached.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CollectionExists`] if the name is taken.
    pub fn create_collection(
        &mut self,
        name: &str,
        schema: DocumentSchema,
    ) -> Result<&mut Collection> {
        if self.collections.contains_key(name) {
            return Err(StoreError::CollectionExists {
                name: name.to_string(),
            });
        }
        debug!(database = %self.name, collection = name, "collection created");
        Ok(self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(name, schema)))
    }

    /// Borrow a collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCollection`] when absent.
    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.collections
            .get(name)
            .ok_or_else(|| StoreError::UnknownCollection {
                name: name.to_string(),
            })
    }

    /// Mutably borrow a collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCollection`] when absent.
    pub fn collection_mut(&mut self, name: &str) -> Result<&mut Collection> {
        self.collections
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownCollection {
                name: name.to_string(),
            })
    }
}
