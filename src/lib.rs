//! Server-rendered storefront over a remote product catalog API.
//!
//! Data flows one way: the catalog client fetches a snapshot, the category
//! filter optionally narrows it, and the renderer turns it into markup.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod pages;
pub mod render;
pub mod telemetry;

pub mod util {
    pub mod env;
}

pub use catalog::{CatalogClient, CatalogError, CatalogSource, Category, CategoryTable, Product};
pub use config::StorefrontConfig;
