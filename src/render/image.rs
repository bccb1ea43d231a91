//! Product image resolution.
//!
//! Three tiers, tried in order:
//! 1. the catalog's per-product photo endpoint, when the product has an id
//! 2. a generic remote stock photo, when it does not
//! 3. the locally bundled placeholder, when the chosen URL is not http(s)

use tracing::debug;

use crate::config::PresentationConfig;

/// Only absolute http(s) URLs are handed to the browser as-is.
pub fn is_remote_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[derive(Debug, Clone)]
pub struct ImageResolver {
    photo_base: String,
    fallback_url: String,
    local_placeholder: String,
}

impl ImageResolver {
    pub fn new(catalog_base_url: &str, presentation: &PresentationConfig) -> Self {
        Self {
            photo_base: format!("{}/product/photo", catalog_base_url.trim_end_matches('/')),
            fallback_url: presentation.fallback_image_url.clone(),
            local_placeholder: presentation.local_placeholder.clone(),
        }
    }

    pub fn photo_url(&self, product_id: &str) -> String {
        format!("{}/{}", self.photo_base, urlencoding::encode(product_id))
    }

    /// Image URL for a product; a blank id counts as absent.
    pub fn resolve(&self, product_id: Option<&str>) -> String {
        let candidate = match product_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => self.photo_url(id),
            None => self.fallback_url.clone(),
        };

        if is_remote_url(&candidate) {
            candidate
        } else {
            debug!(candidate = %candidate, "image url is not http(s); using local placeholder");
            self.local_placeholder.clone()
        }
    }
}
