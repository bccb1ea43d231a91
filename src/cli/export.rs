use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::api::AppState;
use crate::pages;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Pages land under `<out_dir>/categories/<slug>.html`.
    pub out_dir: PathBuf,
}

/// Pre-render every category page from a fresh catalog snapshot.
///
/// Unlike serving, a catalog failure aborts the export: a half-written set of
/// pages is worse than none.
pub async fn run(state: &AppState, cfg: &ExportConfig) -> Result<Vec<PathBuf>> {
    let dir = cfg.out_dir.join("categories");
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::with_capacity(state.categories.len());
    for slug in state.categories.slugs() {
        let props = pages::load_category_page(state.catalog.as_ref(), &state.categories, slug)
            .await
            .with_context(|| format!("loading category {slug}"))?
            .with_context(|| format!("category {slug} vanished from the table"))?;

        let html = state.renderer.category_page(slug, &props.products);
        let path = page_path(&dir, slug);
        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        info!(slug, products = props.products.len(), path = %path.display(), "exported category page");
        written.push(path);
    }
    Ok(written)
}

fn page_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.html"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::CategoryTable;
    use crate::config::StorefrontConfig;
    use crate::pages::testing::{product, FakeCatalog};

    fn state(catalog: FakeCatalog) -> AppState {
        let config = StorefrontConfig {
            categories: CategoryTable::parse("Dairy=X,Fruits&Vegetables=Y").unwrap(),
            ..Default::default()
        };
        AppState::new(&config, Arc::new(catalog))
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("storefront-export-{}", uuid::Uuid::new_v4()))
    }

    #[actix_web::test]
    async fn writes_one_page_per_category() {
        let out_dir = scratch_dir();
        let state = state(FakeCatalog::with(vec![product("a", "X"), product("b", "Y")]));

        let written = run(&state, &ExportConfig { out_dir: out_dir.clone() }).await.unwrap();
        assert_eq!(
            written,
            vec![
                out_dir.join("categories/Dairy.html"),
                out_dir.join("categories/Fruits&Vegetables.html"),
            ]
        );

        let dairy = std::fs::read_to_string(&written[0]).unwrap();
        assert!(dairy.contains("Category: Dairy"));
        assert!(dairy.contains("Product a"));
        assert!(!dairy.contains("Product b"));

        std::fs::remove_dir_all(out_dir).unwrap();
    }

    #[actix_web::test]
    async fn catalog_outage_aborts_export() {
        let out_dir = scratch_dir();
        let state = state(FakeCatalog::offline());
        assert!(run(&state, &ExportConfig { out_dir: out_dir.clone() }).await.is_err());
        let _ = std::fs::remove_dir_all(out_dir);
    }
}
