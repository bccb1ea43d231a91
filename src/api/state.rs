use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{CatalogSource, CategoryTable};
use crate::config::StorefrontConfig;
use crate::render::Renderer;

/// Shared, read-only request context. No catalog data lives here; every
/// page load fetches its own snapshot.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub categories: Arc<CategoryTable>,
    pub renderer: Arc<Renderer>,
    pub catalog_base_url: String,
    pub revalidate_secs: u64,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: &StorefrontConfig, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            categories: Arc::new(config.categories.clone()),
            renderer: Arc::new(Renderer::new(config)),
            catalog_base_url: config.catalog.base_url.clone(),
            revalidate_secs: config.presentation.revalidate_secs,
            started_at: Instant::now(),
        }
    }
}
