use std::sync::Arc;

use crate::application::services::{RedirectResolver, ShortenService};
use crate::domain::repositories::MappingStore;
use crate::utils::code_generator::CodeGenerator;

/// Shared state injected into every handler.
///
/// The store handle is the only shared resource; both services hold a clone of it.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_resolver: Arc<RedirectResolver>,
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), generator, base_url)),
            redirect_resolver: Arc::new(RedirectResolver::new(store.clone())),
            store,
        }
    }
}
