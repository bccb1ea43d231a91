use actix_web::{http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::render::Renderer;

/// Failures of an HTML page request. Each renders as a small error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Catalog(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Page not found",
            AppError::Catalog(_) => "Catalog unavailable",
        }
    }

    /// Message shown to visitors; upstream detail stays in the logs.
    fn public_detail(&self) -> String {
        match self {
            AppError::NotFound(m) => m.clone(),
            AppError::Catalog(_) => {
                "The product catalog could not be loaded. Please try again shortly.".to_string()
            }
        }
    }

    /// Error page inside the regular site layout, nav included.
    pub fn render(&self, renderer: &Renderer) -> HttpResponse {
        match self {
            AppError::NotFound(_) => tracing::debug!(error = %self, "responding with not found"),
            AppError::Catalog(_) => tracing::error!(application_error = %self, "responding with error"),
        }

        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(renderer.error_page(self.heading(), &self.public_detail()))
    }
}
