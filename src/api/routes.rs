// Route table for the storefront

use crate::api::handlers;
use crate::config::LOCAL_PLACEHOLDER_PATH;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Pages
        .route("/", web::get().to(handlers::home_page))
        .route("/categories/{category}", web::get().to(handlers::category_page))
        .route("/product/{id}", web::get().to(handlers::product_page))
        // Page data, same loaders as the pages above
        .service(
            web::scope("/data")
                .route("/index.json", web::get().to(handlers::home_data))
                .route(
                    "/categories/{category}.json",
                    web::get().to(handlers::category_data),
                )
                .route("/product/{id}.json", web::get().to(handlers::product_data)),
        )
        .route(LOCAL_PLACEHOLDER_PATH, web::get().to(handlers::placeholder_image))
        .route("/health", web::get().to(handlers::health_check));
}
