/// Shared application state
use crate::services::CatalogService;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Built once at startup and cloned into each request; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }
}
