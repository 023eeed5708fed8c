//! In-process mapping store backed by `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError};

/// Mapping store that keeps everything in memory.
///
/// Used for local development (`STORAGE_BACKEND=memory`) and tests. Inserts
/// go through the map's entry API, so two concurrent inserts of the same code
/// resolve to exactly one winner and one [`StoreError::Conflict`].
/// Shard guards are never held across an `.await`.
pub struct MemoryMappingStore {
    mappings: DashMap<String, UrlMapping>,
    next_id: AtomicI64,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        debug!("Using in-memory mapping store");
        Self {
            mappings: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for MemoryMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.mappings.contains_key(code))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        match self.mappings.entry(new_mapping.code.clone()) {
            Entry::Occupied(entry) => Err(StoreError::Conflict(entry.key().clone())),
            Entry::Vacant(entry) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let mapping = UrlMapping::from_new(id, new_mapping);
                entry.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.mappings.get(code).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
