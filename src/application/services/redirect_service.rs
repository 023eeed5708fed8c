//! Short code resolution.

use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Resolves codes to their long URL.
///
/// Expiry is not checked: a mapping past its `expires_at` still resolves.
pub struct RedirectResolver {
    store: Arc<dyn MappingStore>,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Returns the stored long URL for `code`, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this exact code.
    /// Returns [`AppError::StorageFailure`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let mapping = self
            .store
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(code.to_string()))?;

        debug!(code = %code, "Resolved short link");

        Ok(mapping.long_url)
    }
}
