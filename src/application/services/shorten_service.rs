//! Short link creation.

use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_long_url;

/// Creates new mappings: validate, generate, check, insert.
///
/// A collision is reported to the caller as [`AppError::CodeInUse`]; the
/// service never draws a second code.
pub struct ShortenService {
    store: Arc<dyn MappingStore>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl ShortenService {
    /// Creates a new shortening service.
    ///
    /// `base_url` is prepended verbatim to every code to build `short_url`.
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            generator,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens `long_url` under a freshly generated code.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if `long_url` is not an absolute URI (the
    ///   store is not touched)
    /// - [`AppError::GenerationFailure`] if no code could be generated
    /// - [`AppError::CodeInUse`] if the code is already stored, or another
    ///   request inserted it between the existence check and the insert
    /// - [`AppError::StorageFailure`] on any other store error
    pub async fn shorten(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        validate_long_url(long_url).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        let code = self.generator.generate()?;

        if self.store.exists(&code).await? {
            warn!(code = %code, "Generated code already in use");
            return Err(AppError::CodeInUse(code));
        }

        // Postgres keeps microseconds; truncating here keeps the returned and stored values equal.
        let created_at = Utc::now().trunc_subsecs(6);
        let new_mapping =
            NewUrlMapping::new(code, long_url.to_string(), &self.base_url, created_at);

        let mapping = self.store.insert(new_mapping).await.inspect_err(|e| {
            warn!(error = %e, "Failed to insert mapping");
        })?;

        info!(id = mapping.id, code = %mapping.code, "Created short link");

        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::retention;
    use crate::domain::repositories::{MockMappingStore, StoreError};
    use crate::utils::code_generator::{CodeGenerationError, MockCodeGenerator};

    const BASE_URL: &str = "http://localhost:5000/";

    fn fixed_generator(code: &'static str) -> MockCodeGenerator {
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(move || Ok(code.to_string()));
        generator
    }

    fn service(store: MockMappingStore, generator: MockCodeGenerator) -> ShortenService {
        ShortenService::new(Arc::new(store), Arc::new(generator), BASE_URL)
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut store = MockMappingStore::new();
        store
            .expect_exists()
            .withf(|code| code == "abc123XYZ_-q")
            .times(1)
            .returning(|_| Ok(false));
        store
            .expect_insert()
            .withf(|new_mapping| {
                new_mapping.code == "abc123XYZ_-q"
                    && new_mapping.long_url == "https://example.com/a"
                    && new_mapping.short_url == "http://localhost:5000/abc123XYZ_-q"
            })
            .times(1)
            .returning(|new_mapping| Ok(UrlMapping::from_new(1, new_mapping)));

        let service = service(store, fixed_generator("abc123XYZ_-q"));

        let mapping = service.shorten("https://example.com/a").await.unwrap();

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.code, "abc123XYZ_-q");
        assert_eq!(mapping.long_url, "https://example.com/a");
        assert_eq!(mapping.short_url, "http://localhost:5000/abc123XYZ_-q");
    }

    #[tokio::test]
    async fn test_shorten_expires_after_retention() {
        let mut store = MockMappingStore::new();
        store.expect_exists().returning(|_| Ok(false));
        store
            .expect_insert()
            .returning(|new_mapping| Ok(UrlMapping::from_new(1, new_mapping)));

        let service = service(store, fixed_generator("expiry"));

        let mapping = service.shorten("https://example.com").await.unwrap();

        assert_eq!(mapping.expires_at - mapping.created_at, retention());
    }

    #[tokio::test]
    async fn test_shorten_keeps_url_unmodified() {
        let mut store = MockMappingStore::new();
        store.expect_exists().returning(|_| Ok(false));
        store
            .expect_insert()
            .withf(|new_mapping| new_mapping.long_url == "HTTPS://Example.COM:443/Path#frag")
            .returning(|new_mapping| Ok(UrlMapping::from_new(1, new_mapping)));

        let service = service(store, fixed_generator("verbatim"));

        let mapping = service
            .shorten("HTTPS://Example.COM:443/Path#frag")
            .await
            .unwrap();

        assert_eq!(mapping.long_url, "HTTPS://Example.COM:443/Path#frag");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_touches_nothing() {
        let mut store = MockMappingStore::new();
        store.expect_exists().times(0);
        store.expect_insert().times(0);
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(0);

        let service = service(store, generator);

        let result = service.shorten("not a url").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_shorten_existing_code_is_not_retried() {
        let mut store = MockMappingStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store.expect_insert().times(0);

        let service = service(store, fixed_generator("taken123"));

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::CodeInUse(ref code)) if code == "taken123"));
    }

    #[tokio::test]
    async fn test_shorten_lost_insert_race_is_code_in_use() {
        let mut store = MockMappingStore::new();
        store.expect_exists().times(1).returning(|_| Ok(false));
        store
            .expect_insert()
            .times(1)
            .returning(|new_mapping| Err(StoreError::Conflict(new_mapping.code)));

        let service = service(store, fixed_generator("racecode"));

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::CodeInUse(ref code)) if code == "racecode"));
    }

    #[tokio::test]
    async fn test_shorten_generation_failure() {
        let mut store = MockMappingStore::new();
        store.expect_exists().times(0);
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|| Err(CodeGenerationError("entropy exhausted".to_string())));

        let service = service(store, generator);

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::GenerationFailure(_))));
    }

    #[tokio::test]
    async fn test_shorten_storage_failure_on_exists() {
        let mut store = MockMappingStore::new();
        store
            .expect_exists()
            .times(1)
            .returning(|_| Err(StoreError::Timeout("exists".to_string())));
        store.expect_insert().times(0);

        let service = service(store, fixed_generator("slowcode"));

        let result = service.shorten("https://example.com").await;

        assert!(matches!(
            result,
            Err(AppError::StorageFailure(StoreError::Timeout(_)))
        ));
    }
}
