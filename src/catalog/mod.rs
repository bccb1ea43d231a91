//! Remote product catalog: wire records, the HTTP client, and the category
//! lookups applied to fetched snapshots.

pub mod categories;
pub mod client;
pub mod filter;
pub mod models;

pub use categories::CategoryTable;
pub use client::{CatalogClient, CatalogError, CatalogResult, CatalogSource};
pub use filter::filter_by_category;
pub use models::{Category, Product};
