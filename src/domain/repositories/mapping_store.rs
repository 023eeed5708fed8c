//! Store trait for URL mapping persistence.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`MappingStore`].
///
/// A missing mapping is never an error; lookups return `Ok(None)` / `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("code already exists: {0}")]
    Conflict(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Persistence contract for code → URL mappings.
///
/// Implementations are shared across concurrent requests behind an
/// `Arc<dyn MappingStore>` and must not require external locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Returns `true` iff a mapping with exactly this code is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] / [`StoreError::Unavailable`] on connectivity
    /// problems and [`StoreError::Query`] on any other backend failure.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Persists a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the code is already stored, even when
    /// a preceding [`MappingStore::exists`] call reported it free.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Finds a mapping by exact code match.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
