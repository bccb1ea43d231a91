use serde::Serialize;

use crate::catalog::Product;
use crate::render::image::ImageResolver;

/// The fields of a product that the views actually print.
///
/// Numbers are carried as-is; no currency or locale formatting happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub sold: i64,
    pub image_url: String,
    /// Link to the detail page; absent when the product has no id.
    pub detail_href: Option<String>,
}

pub fn to_display_record(product: &Product, images: &ImageResolver) -> DisplayRecord {
    let id = product.id();
    DisplayRecord {
        id: id.map(str::to_string),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        stock: product.stock,
        sold: product.sold,
        image_url: images.resolve(id),
        detail_href: id.map(|id| format!("/product/{}", urlencoding::encode(id))),
    }
}

/// `Rs 120`, or just `120` without a prefix.
pub fn price_label(price: f64, currency_prefix: Option<&str>) -> String {
    match currency_prefix {
        Some(prefix) => format!("{prefix} {price}"),
        None => price.to_string(),
    }
}
