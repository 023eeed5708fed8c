//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code → long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping, before the store assigns an id

pub mod mapping;

pub use mapping::{NewUrlMapping, RETENTION_DAYS, UrlMapping, retention};
