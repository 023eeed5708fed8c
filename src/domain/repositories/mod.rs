//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
