// Storefront HTTP server using actix-web

use crate::api::state::AppState;
use crate::api::{handlers, middleware, routes};
use crate::util::env::{env_opt, env_parse};
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct StorefrontServer {
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
    /// `None` lets actix size the pool from the CPU count.
    pub workers: Option<usize>,
}

impl StorefrontServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env_opt("STOREFRONT_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = env_parse::<u16>("STOREFRONT_PORT")?.unwrap_or(3000);
        let allowed_origins = env_opt("ALLOWED_ORIGINS").unwrap_or_default();
        let workers = env_parse::<usize>("STOREFRONT_WORKERS")?.filter(|&n| n > 0);

        Ok(Self {
            host,
            port,
            allowed_origins,
            workers,
        })
    }

    /// Serve until shutdown.
    pub async fn run(self, state: AppState) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        tracing::info!(
            host = %self.host,
            port = %self.port,
            catalog = %state.catalog_base_url,
            categories = state.categories.len(),
            "Starting storefront server"
        );

        let data = web::Data::new(state);
        let allowed_origins = self.allowed_origins.clone();

        let mut server = HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(&allowed_origins);

            App::new()
                .app_data(data.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
                .default_service(web::to(handlers::not_found))
        });
        if let Some(workers) = self.workers {
            server = server.workers(workers);
        }

        server
            .bind(&bind_addr)
            .with_context(|| format!("Failed to bind to {}", bind_addr))?
            .run()
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
