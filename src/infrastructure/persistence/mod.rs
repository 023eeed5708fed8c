//! Mapping store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::MappingStore`].
//!
//! - [`PgMappingStore`] - PostgreSQL storage via SQLx
//! - [`MemoryMappingStore`] - In-process storage for development and tests

pub mod memory_mapping_store;
pub mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
