// HTTP request handlers: storefront pages, their JSON page data, and health

use actix_web::{http::header, web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::api::errors::AppError;
use crate::api::models::{ApiResponse, HealthResponse};
use crate::api::state::AppState;
use crate::catalog::CatalogError;
use crate::pages;

const HTML: &str = "text/html; charset=utf-8";
const NO_STORE: &str = "private, no-cache, no-store, max-age=0, must-revalidate";
const PLACEHOLDER_SVG: &str = include_str!("../../assets/product_placeholder.svg");

/// Category pages may be reused by a shared cache for `secs`, then refreshed
/// in the background.
fn revalidate_header(secs: u64) -> String {
    format!("public, max-age=0, s-maxage={secs}, stale-while-revalidate={secs}")
}

fn catalog_unavailable(err: &CatalogError) -> HttpResponse {
    warn!(error = %err, "page data unavailable");
    HttpResponse::BadGateway().json(ApiResponse::<()>::error("catalog unavailable"))
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        catalog_base_url: state.catalog_base_url.clone(),
        categories: state.categories.slugs().map(str::to_string).collect(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    });
    HttpResponse::Ok().json(response)
}

#[instrument(name = "handler::home", skip(state))]
pub async fn home_page(state: web::Data<AppState>) -> HttpResponse {
    match pages::load_home_page(state.catalog.as_ref()).await {
        Ok(props) => HttpResponse::Ok()
            .content_type(HTML)
            .insert_header((header::CACHE_CONTROL, NO_STORE))
            .body(state.renderer.home_page(&props.products)),
        Err(err) => AppError::from(err).render(&state.renderer),
    }
}

#[instrument(name = "handler::category", skip(state, path), fields(slug = %path.as_str()))]
pub async fn category_page(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let slug = path.into_inner();
    match pages::load_category_page(state.catalog.as_ref(), &state.categories, &slug).await {
        Ok(Some(props)) => HttpResponse::Ok()
            .content_type(HTML)
            .insert_header((header::CACHE_CONTROL, revalidate_header(state.revalidate_secs)))
            .body(state.renderer.category_page(&slug, &props.products)),
        Ok(None) => {
            AppError::NotFound(format!("Unknown category \"{slug}\"")).render(&state.renderer)
        }
        Err(err) => AppError::from(err).render(&state.renderer),
    }
}

/// Detail page. A product that cannot be fetched renders the "Product not
/// found" alert with a 404 status rather than an error page.
#[instrument(name = "handler::product", skip(state, path), fields(product_id = %path.as_str()))]
pub async fn product_page(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    let props = pages::load_product_page(state.catalog.as_ref(), &id).await;

    let mut builder = if props.product.is_some() {
        HttpResponse::Ok()
    } else {
        info!(product_id = %id, "rendering product not found");
        HttpResponse::NotFound()
    };
    builder
        .content_type(HTML)
        .insert_header((header::CACHE_CONTROL, NO_STORE))
        .body(state.renderer.product_page(props.product.as_ref()))
}

pub async fn home_data(state: web::Data<AppState>) -> HttpResponse {
    match pages::load_home_page(state.catalog.as_ref()).await {
        Ok(props) => HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, NO_STORE))
            .json(props),
        Err(err) => catalog_unavailable(&err),
    }
}

pub async fn category_data(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let slug = path.into_inner();
    match pages::load_category_page(state.catalog.as_ref(), &state.categories, &slug).await {
        Ok(Some(props)) => HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, revalidate_header(state.revalidate_secs)))
            .json(props),
        Ok(None) => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("unknown category {slug}"))),
        Err(err) => catalog_unavailable(&err),
    }
}

/// Always 200: `{"product": null}` is the not-found answer.
pub async fn product_data(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let props = pages::load_product_page(state.catalog.as_ref(), &path.into_inner()).await;
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, NO_STORE))
        .json(props)
}

/// The locally bundled image used when no remote image URL is usable.
pub async fn placeholder_image() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(PLACEHOLDER_SVG)
}

pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    AppError::NotFound("No page lives at this address.".to_string()).render(&state.renderer)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::api::routes::configure_routes;
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

    fn catalog() -> FakeCatalog {
        let mut milk = product("a", "X");
        milk.name = "Milk".into();
        milk.price = 120.0;
        let mut apple = product("b", "Y");
        apple.name = "Apple".into();
        FakeCatalog::with(vec![milk, apple])
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Option<String>, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes)
                .default_service(web::to(not_found)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let cache = resp
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = test::read_body(resp).await;
        (status, cache, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn home_page_lists_every_product() {
        let (status, cache, body) = get(state(catalog()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some(NO_STORE));
        assert!(body.contains("Milk"));
        assert!(body.contains("Apple"));
        assert!(body.contains("Price: Rs 120"));
    }

    #[actix_web::test]
    async fn home_page_reports_catalog_outage() {
        let (status, _, body) = get(state(FakeCatalog::offline()), "/").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Catalog unavailable"));
        assert!(body.contains("href=\"/categories/Dairy\""));
    }

    #[actix_web::test]
    async fn category_page_shows_only_its_products() {
        let (status, cache, body) = get(state(catalog()), "/categories/Dairy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            cache.as_deref(),
            Some("public, max-age=0, s-maxage=300, stale-while-revalidate=300")
        );
        assert!(body.contains("Category: Dairy"));
        assert!(body.contains("Milk"));
        assert!(!body.contains("Apple"));

        let (status, _, body) = get(state(catalog()), "/categories/Fruits&Vegetables").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Apple"));
    }

    #[actix_web::test]
    async fn unknown_category_is_404() {
        let (status, _, body) = get(state(catalog()), "/categories/Bakery").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Bakery"));
    }

    #[actix_web::test]
    async fn product_page_renders_detail() {
        let (status, _, body) = get(state(catalog()), "/product/a").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Milk</h1>"));
        assert!(body.contains("Rs 120"));
    }

    #[actix_web::test]
    async fn missing_product_renders_not_found_message() {
        let (status, _, body) = get(state(catalog()), "/product/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Product not found"));

        let (status, _, body) = get(state(FakeCatalog::offline()), "/product/a").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Product not found"));
    }

    #[actix_web::test]
    async fn page_data_mirrors_props() {
        let (status, _, body) = get(state(catalog()), "/data/categories/Dairy.json").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["products"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["products"][0]["_id"], "a");

        let (status, _, body) = get(state(catalog()), "/data/product/missing.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"product":null}"#);

        let (status, _, body) = get(state(FakeCatalog::offline()), "/data/index.json").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
    }

    #[actix_web::test]
    async fn health_and_assets() {
        let (status, _, body) = get(state(catalog()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["status"], "healthy");
        assert_eq!(json["data"]["categories"][1], "Fruits&Vegetables");

        let (status, _, body) = get(state(catalog()), "/assets/product_placeholder.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<svg"));

        let (status, _, body) = get(state(catalog()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("href=\"/categories/Fruits%26Vegetables\""));
    }
}
