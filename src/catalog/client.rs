use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::models::Product;
use crate::config::CatalogConfig;

/// Failure modes of a catalog fetch. Both fetch operations report through
/// this type; callers decide whether a failure means "not found" or a hard
/// error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("catalog returned {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("catalog response from {url} is not valid JSON for the expected type: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Read-only access to the remote catalog.
///
/// Implementations must be stateless across calls: every page load sees a
/// fresh snapshot.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The whole catalog; the endpoint takes no paging parameters.
    async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>>;

    async fn fetch_product_by_id(&self, id: &str) -> CatalogResult<Product>;

    /// Single-product lookup where every failure reads as "not found".
    async fn find_product(&self, id: &str) -> Option<Product> {
        match self.fetch_product_by_id(id).await {
            Ok(product) => Some(product),
            Err(err) if err.is_not_found() => {
                debug!(product_id = %id, "product not found in catalog");
                None
            }
            Err(err) => {
                warn!(product_id = %id, error = %err, "product lookup failed; treating as not found");
                None
            }
        }
    }
}

/// HTTP client for the catalog service.
///
/// Endpoints (relative to the configured base):
/// - GET /products - JSON array of products
/// - GET /product/{id} - JSON product, non-2xx when unknown
/// - GET /product/photo/{id} - product image (referenced by URL only)
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        info!(base_url = %base_url, timeout_secs = ?config.timeout_secs, "catalog client ready");
        Ok(Self { base_url, http })
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: &str) -> String {
        format!("{}/product/{}", self.base_url, urlencoding::encode(id))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> CatalogResult<T> {
        let started = Instant::now();
        let resp = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            debug!(url = %url, status = %status, "catalog returned non-success status");
            return Err(CatalogError::Status { url, status });
        }

        let body = resp.bytes().await.map_err(|source| CatalogError::Transport {
            url: url.clone(),
            source,
        })?;
        let value = serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            url: url.clone(),
            source,
        })?;

        debug!(
            url = %url,
            status = %status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog fetch complete"
        );
        Ok(value)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_all_products(&self) -> CatalogResult<Vec<Product>> {
        let products: Vec<Product> = self.get_json(self.products_url()).await?;
        info!(count = products.len(), "fetched catalog");
        Ok(products)
    }

    async fn fetch_product_by_id(&self, id: &str) -> CatalogResult<Product> {
        self.get_json(self.product_url(id)).await
    }
}
