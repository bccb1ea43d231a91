//! Product renderer: maps catalog records to display records and markup.

pub mod display;
pub mod html;
pub mod image;

pub use display::{price_label, to_display_record, DisplayRecord};
pub use image::{is_remote_url, ImageResolver};

use crate::catalog::{CategoryTable, Product};
use crate::config::StorefrontConfig;

/// Everything the views need besides the products themselves. Built once
/// at startup; holds no per-request state.
#[derive(Debug, Clone)]
pub struct Renderer {
    images: ImageResolver,
    currency_prefix: Option<String>,
    categories: CategoryTable,
    revalidate_secs: u64,
    site_verification: Option<String>,
}

impl Renderer {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            images: ImageResolver::new(&config.catalog.base_url, &config.presentation),
            currency_prefix: config.presentation.currency_prefix.clone(),
            categories: config.categories.clone(),
            revalidate_secs: config.presentation.revalidate_secs,
            site_verification: config.presentation.site_verification.clone(),
        }
    }

    pub fn display_record(&self, product: &Product) -> DisplayRecord {
        to_display_record(product, &self.images)
    }

    pub fn price_label(&self, price: f64) -> String {
        price_label(price, self.currency_prefix.as_deref())
    }

    fn page(&self, title: &str, body: &str) -> String {
        html::layout(
            title,
            self.site_verification.as_deref(),
            self.categories.slugs(),
            body,
        )
    }

    fn grid(&self, products: &[Product]) -> String {
        let records: Vec<DisplayRecord> = products.iter().map(|p| self.display_record(p)).collect();
        html::product_grid(records.iter().map(|r| (r, self.price_label(r.price))))
    }

    pub fn home_page(&self, products: &[Product]) -> String {
        let body = format!(
            "<main><h1>Home Page</h1>{}{}</main>",
            html::alert(
                "primary",
                "This page is rendered on the server for <strong>every request</strong>, \
so search engines can crawl the full product list."
            ),
            self.grid(products)
        );
        self.page("Products", &body)
    }

    pub fn category_page(&self, slug: &str, products: &[Product]) -> String {
        let title = format!("Category: {slug}");
        let minutes = self.revalidate_secs.div_ceil(60);
        let body = format!(
            "<main><h1>{}</h1>{}{}</main>",
            html::escape_html(&title),
            html::alert(
                "primary",
                &format!(
                    "This page may be served from a shared cache for fast loading \
and shows data not older than <strong>{minutes} minutes</strong>."
                )
            ),
            self.grid(products)
        );
        self.page(&title, &body)
    }

    pub fn product_page(&self, product: Option<&Product>) -> String {
        let body = match product {
            Some(product) => {
                let record = self.display_record(product);
                html::product_detail(&record, &self.price_label(record.price))
            }
            None => html::alert("danger", "Product not found"),
        };
        self.page("Product Details", &format!("<main>{body}</main>"))
    }

    pub fn error_page(&self, heading: &str, detail: &str) -> String {
        let body = format!(
            "<main><h1>{}</h1>{}</main>",
            html::escape_html(heading),
            html::alert("danger", &html::escape_html(detail))
        );
        self.page(heading, &body)
    }
}
