// Category slug table: route segment -> opaque catalog category id

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ConfigError;

/// Slugs known at build time, with the catalog ids they map to.
pub const DEFAULT_CATEGORIES: [(&str, &str); 2] = [
    ("Dairy", "64fc91e3351a494ec88ed21a"),
    ("Fruits&Vegetables", "64fcaa74ce15352f005f6e98"),
];

/// Ordered mapping from category slug to catalog category id.
///
/// Built once at startup and shared read-only with the page loaders. Keeping
/// it in sync with the catalog service's category records is an operational
/// concern; nothing here checks the ids against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTable {
    entries: IndexMap<String, String>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        let entries = DEFAULT_CATEGORIES
            .iter()
            .map(|(slug, id)| (slug.to_string(), id.to_string()))
            .collect();
        Self { entries }
    }
}

/// Slugs become both `/categories/{slug}` and `<slug>.html` on disk.
fn is_path_segment(slug: &str) -> bool {
    !slug.contains("..")
        && !slug
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_control())
}

impl CategoryTable {
    /// Build a table from `(slug, id)` pairs, rejecting blanks, duplicate
    /// slugs and slugs that cannot serve as one route or file name segment.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (slug, id) in pairs {
            let slug = slug.into().trim().to_string();
            let id = id.into().trim().to_string();
            if slug.is_empty() || id.is_empty() {
                return Err(ConfigError::CategoryMap(format!(
                    "empty slug or id in entry {slug:?}={id:?}"
                )));
            }
            if !is_path_segment(&slug) {
                return Err(ConfigError::CategoryMap(format!(
                    "slug {slug:?} must be a single path segment"
                )));
            }
            if entries.contains_key(&slug) {
                return Err(ConfigError::CategoryMap(format!("duplicate slug {slug:?}")));
            }
            entries.insert(slug, id);
        }
        if entries.is_empty() {
            return Err(ConfigError::CategoryMap("no categories configured".into()));
        }
        Ok(Self { entries })
    }

    /// Parse the `CATEGORY_MAP` format: comma-separated `slug=id` pairs.
    ///
    /// Slugs may contain `&` (e.g. `Fruits&Vegetables=64fcaa74...`).
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut pairs = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let Some((slug, id)) = part.split_once('=') else {
                return Err(ConfigError::CategoryMap(format!(
                    "expected slug=id, got {part:?}"
                )));
            };
            pairs.push((slug, id));
        }
        Self::from_pairs(pairs)
    }

    /// Category id for a slug; `None` if the slug is not routable.
    pub fn resolve(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    /// Slugs in declaration order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
