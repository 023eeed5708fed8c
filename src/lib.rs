//! # snaplink
//!
//! A small URL shortening service built with Axum and PostgreSQL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and the store trait
//! - **Application Layer** ([`application`]) - Shortening and redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## HTTP Surface
//!
//! - `POST /shorten` with `{"longUrl": "..."}` → `201 {"newUrl", "expires", "db_id"}`
//! - `GET /{code}` → `308 Permanent Redirect` to the stored URL
//!
//! Each generated code is checked once against the store and then inserted;
//! a collision is returned to the caller as a 400 rather than retried. Every
//! mapping carries an `expires_at` five days after creation, which is
//! informational only.
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PASSWORD="secret"          # or DATABASE_URL=postgres://...
//! export BASE_URL="http://localhost:5000/"
//! cargo run
//!
//! # Without a database
//! STORAGE_BACKEND=memory cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{RedirectResolver, ShortenService};
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::{MappingStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
