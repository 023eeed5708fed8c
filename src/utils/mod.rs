//! Helpers used by the application services.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL validation

pub mod code_generator;
pub mod url_validator;
