//! Startup configuration, read from the environment once and then shared
//! read-only with every request.

use thiserror::Error;

use crate::catalog::CategoryTable;
use crate::util::env::{env_opt, env_parse, preflight_check};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://ecomproductapi.onrender.com/api";
pub const DEFAULT_FALLBACK_IMAGE_URL: &str = "https://images.pexels.com/photos/3577561/pexels-photo-3577561.jpeg?auto=compress&cs=tinysrgb&dpr=3&h=750&w=1260";
pub const LOCAL_PLACEHOLDER_PATH: &str = "/assets/product_placeholder.svg";
pub const DEFAULT_CURRENCY_PREFIX: &str = "Rs";
/// Search console ownership token emitted in every page head.
pub const DEFAULT_SITE_VERIFICATION: &str = "dqtJvFR4KWSG0RrtMb5LkLzBq86KHismG-fHfVS10ng";
/// Category pages may be served from a shared cache for this long.
pub const DEFAULT_REVALIDATE_SECS: u64 = 5 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CATEGORY_MAP: {0}")]
    CategoryMap(String),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Where and how to reach the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// `None` means no client-side deadline.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            timeout_secs: Some(30),
            user_agent: format!("storefront/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Display options applied uniformly to the grid and detail views.
#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// Label placed before prices, e.g. "Rs". `None` prints bare numbers.
    pub currency_prefix: Option<String>,
    pub fallback_image_url: String,
    pub local_placeholder: String,
    pub revalidate_secs: u64,
    /// `google-site-verification` token; `None` omits the meta tag.
    pub site_verification: Option<String>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            currency_prefix: Some(DEFAULT_CURRENCY_PREFIX.to_string()),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
            local_placeholder: LOCAL_PLACEHOLDER_PATH.to_string(),
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
            site_verification: Some(DEFAULT_SITE_VERIFICATION.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    pub catalog: CatalogConfig,
    pub categories: CategoryTable,
    pub presentation: PresentationConfig,
}

impl StorefrontConfig {
    /// Read configuration from the environment (after `.env` is loaded).
    ///
    /// Unset variables fall back to the built-in defaults; set but malformed
    /// ones are errors.
    pub fn from_env() -> anyhow::Result<Self> {
        preflight_check(
            "storefront",
            &[],
            &[
                "CATALOG_BASE_URL",
                "CATALOG_TIMEOUT_SECS",
                "CATEGORY_MAP",
                "CURRENCY_PREFIX",
                "FALLBACK_IMAGE_URL",
                "REVALIDATE_SECS",
                "SITE_VERIFICATION",
            ],
        )?;

        let defaults = Self::default();

        let base_url = env_opt("CATALOG_BASE_URL").unwrap_or(defaults.catalog.base_url);
        if url::Url::parse(&base_url).is_err() {
            tracing::warn!(
                base_url = %base_url,
                "CATALOG_BASE_URL is not an absolute URL; product photos will use the local placeholder"
            );
        }
        let timeout_secs = match env_parse::<u64>("CATALOG_TIMEOUT_SECS")? {
            Some(0) => None,
            Some(secs) => Some(secs),
            None => defaults.catalog.timeout_secs,
        };

        let categories = match env_opt("CATEGORY_MAP") {
            Some(raw) => CategoryTable::parse(&raw)?,
            None => defaults.categories,
        };

        let currency_prefix =
            optional_text("CURRENCY_PREFIX", defaults.presentation.currency_prefix);
        let site_verification =
            optional_text("SITE_VERIFICATION", defaults.presentation.site_verification);

        let revalidate_secs =
            env_parse::<u64>("REVALIDATE_SECS")?.unwrap_or(defaults.presentation.revalidate_secs);

        Ok(Self {
            catalog: CatalogConfig {
                base_url,
                timeout_secs,
                ..defaults.catalog
            },
            categories,
            presentation: PresentationConfig {
                currency_prefix,
                fallback_image_url: env_opt("FALLBACK_IMAGE_URL")
                    .unwrap_or(defaults.presentation.fallback_image_url),
                revalidate_secs,
                site_verification,
                ..defaults.presentation
            },
        })
    }
}

/// Unset keeps `default`; set-but-empty turns the feature off. `env_opt`
/// cannot tell those two apart.
fn optional_text(key: &str, default: Option<String>) -> Option<String> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => Some(raw.trim().to_string()),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_live_catalog() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.presentation.currency_prefix.as_deref(), Some("Rs"));
        assert_eq!(config.presentation.revalidate_secs, 300);
        assert_eq!(config.categories.len(), 2);
    }

    // Single test so the process-wide variables are never raced.
    #[test]
    fn reads_overrides_from_env() {
        std::env::set_var("CATALOG_BASE_URL", "http://localhost:4000/api");
        std::env::set_var("CATALOG_TIMEOUT_SECS", "0");
        std::env::set_var("CATEGORY_MAP", "Bakery=b1");
        std::env::set_var("CURRENCY_PREFIX", "");
        std::env::set_var("REVALIDATE_SECS", "60");
        std::env::set_var("SITE_VERIFICATION", "");

        let config = StorefrontConfig::from_env().unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:4000/api");
        assert_eq!(config.catalog.timeout_secs, None);
        assert_eq!(config.categories.resolve("Bakery"), Some("b1"));
        assert_eq!(config.categories.resolve("Dairy"), None);
        assert_eq!(config.presentation.currency_prefix, None);
        assert_eq!(config.presentation.revalidate_secs, 60);
        assert_eq!(config.presentation.site_verification, None);

        std::env::set_var("REVALIDATE_SECS", "soon");
        assert!(StorefrontConfig::from_env().is_err());
        std::env::set_var("REVALIDATE_SECS", "60");

        for garbage in ["30s", "abc", "-1"] {
            std::env::set_var("CATALOG_TIMEOUT_SECS", garbage);
            let err = StorefrontConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CATALOG_TIMEOUT_SECS"), "{err}");
        }
        std::env::set_var("CATALOG_TIMEOUT_SECS", "12");
        assert_eq!(StorefrontConfig::from_env().unwrap().catalog.timeout_secs, Some(12));

        std::env::set_var("CATEGORY_MAP", "Bakery");
        assert!(StorefrontConfig::from_env().is_err());

        for key in [
            "CATALOG_BASE_URL",
            "CATALOG_TIMEOUT_SECS",
            "CATEGORY_MAP",
            "CURRENCY_PREFIX",
            "REVALIDATE_SECS",
            "SITE_VERIFICATION",
        ] {
            std::env::remove_var(key);
        }
    }
}
