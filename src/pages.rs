//! Page loaders: one catalog fetch sequence per page, producing the props
//! the views render. Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::catalog::{filter_by_category, CatalogResult, CatalogSource, CategoryTable, Product};
use crate::render::html::category_href;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsPageProps {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPageProps {
    pub product: Option<Product>,
}

/// Home page: the whole catalog.
#[instrument(name = "page::home", skip_all)]
pub async fn load_home_page(source: &dyn CatalogSource) -> CatalogResult<ProductsPageProps> {
    let products = source.fetch_all_products().await?;
    Ok(ProductsPageProps { products })
}

/// Category page. `Ok(None)` when the slug is not in the table; an empty
/// product list is a valid result.
#[instrument(name = "page::category", skip(source, categories))]
pub async fn load_category_page(
    source: &dyn CatalogSource,
    categories: &CategoryTable,
    slug: &str,
) -> CatalogResult<Option<ProductsPageProps>> {
    let Some(category_id) = categories.resolve(slug) else {
        info!(slug, "unknown category slug");
        return Ok(None);
    };

    let products = filter_by_category(source.fetch_all_products().await?, category_id);
    info!(slug, category_id, matched = products.len(), "category filtered");
    Ok(Some(ProductsPageProps { products }))
}

/// Detail page. Never fails: anything short of a product is "not found".
#[instrument(name = "page::product", skip(source))]
pub async fn load_product_page(source: &dyn CatalogSource, id: &str) -> ProductPageProps {
    ProductPageProps {
        product: source.find_product(id).await,
    }
}

/// Routes for every known category, in table order, for pre-rendering.
pub fn static_paths(categories: &CategoryTable) -> Vec<String> {
    categories.slugs().map(category_href).collect()
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::testing::{product, FakeCatalog};
    use super::*;

    #[actix_web::test]
    async fn home_page_returns_whole_catalog() {
        let catalog = FakeCatalog::with(vec![product("a", "X"), product("b", "Y")]);
        let props = load_home_page(&catalog).await.unwrap();
        assert_eq!(props.products.len(), 2);
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn home_page_surfaces_catalog_failures() {
        assert!(load_home_page(&FakeCatalog::offline()).await.is_err());
    }

    #[actix_web::test]
    async fn category_page_filters_by_mapped_id() {
        let table = CategoryTable::parse("Dairy=X,Fruits=Y").unwrap();
        let catalog = FakeCatalog::with(vec![product("a", "X"), product("b", "Y")]);

        let props = load_category_page(&catalog, &table, "Dairy")
            .await
            .unwrap()
            .unwrap();
        let ids: Vec<&str> = props.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[actix_web::test]
    async fn unknown_category_does_not_fetch() {
        let table = CategoryTable::default();
        let catalog = FakeCatalog::with(vec![product("a", "X")]);
        let props = load_category_page(&catalog, &table, "Bakery").await.unwrap();
        assert!(props.is_none());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn empty_category_is_not_an_error() {
        let table = CategoryTable::parse("Dairy=X").unwrap();
        let catalog = FakeCatalog::with(vec![product("b", "Y")]);
        let props = load_category_page(&catalog, &table, "Dairy")
            .await
            .unwrap()
            .unwrap();
        assert!(props.products.is_empty());
    }

    #[actix_web::test]
    async fn product_page_is_null_on_any_failure() {
        let catalog = FakeCatalog::with(vec![product("a", "X")]);
        assert!(load_product_page(&catalog, "a").await.product.is_some());
        assert!(load_product_page(&catalog, "missing").await.product.is_none());
        assert!(load_product_page(&FakeCatalog::offline(), "a")
            .await
            .product
            .is_none());
    }

    #[test]
    fn static_paths_follow_table_order() {
        assert_eq!(
            static_paths(&CategoryTable::default()),
            vec!["/categories/Dairy", "/categories/Fruits%26Vegetables"]
        );
    }

    #[test]
    fn props_serialize_like_page_data() {
        let props = ProductPageProps { product: None };
        assert_eq!(serde_json::to_string(&props).unwrap(), r#"{"product":null}"#);
    }
}
