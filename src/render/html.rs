// HTML fragments for the storefront pages

use std::fmt::Write as _;

use crate::render::display::DisplayRecord;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn category_href(slug: &str) -> String {
    format!("/categories/{}", urlencoding::encode(slug))
}

/// Full document: head, nav bar with one link per category, then `body`.
pub fn layout<'a>(
    title: &str,
    site_verification: Option<&str>,
    nav_slugs: impl Iterator<Item = &'a str>,
    body: &str,
) -> String {
    let verification = site_verification
        .map(|token| {
            format!(
                "<meta name=\"google-site-verification\" content=\"{}\">",
                escape_html(token)
            )
        })
        .unwrap_or_default();

    let mut nav = String::new();
    for slug in nav_slugs {
        let _ = write!(
            nav,
            "<li class=\"nav-item\"><a class=\"nav-link\" href=\"{}\">{}</a></li>",
            escape_html(&category_href(slug)),
            escape_html(slug)
        );
    }

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
{verification}<title>{title}</title><link rel=\"icon\" href=\"/favicon.ico\"></head><body>\
<nav class=\"navbar\"><a class=\"navbar-brand\" href=\"/\">Storefront</a>\
<ul class=\"navbar-nav\"><li class=\"nav-item\"><a class=\"nav-link\" href=\"/\">Home</a></li>{nav}</ul></nav>\
<div class=\"container\">{body}</div></body></html>",
        title = escape_html(title),
    )
}

pub fn alert(variant: &str, inner_html: &str) -> String {
    format!("<div class=\"alert alert-{variant}\" role=\"alert\">{inner_html}</div>")
}

/// One grid card. The whole card links to the detail page when the product has an id.
pub fn product_card(record: &DisplayRecord, price: &str) -> String {
    let card = format!(
        "<div class=\"card h-100\">\
<img src=\"{img}\" width=\"500\" height=\"200\" alt=\"Product image\" class=\"card-img-top\">\
<div class=\"card-body\"><h5 class=\"card-title\">{name}</h5><p class=\"card-text\">{desc}</p>\
<h5 class=\"card-title\">Price: {price}</h5><p class=\"card-text\">Stock: {stock}</p></div></div>",
        img = escape_html(&record.image_url),
        name = escape_html(&record.name),
        desc = escape_html(&record.description),
        price = escape_html(price),
        stock = record.stock,
    );
    match &record.detail_href {
        Some(href) => format!("<a href=\"{}\">{card}</a>", escape_html(href)),
        None => card,
    }
}

pub fn product_grid<'a>(cards: impl Iterator<Item = (&'a DisplayRecord, String)>) -> String {
    let mut out = String::from("<div class=\"row g-4\">");
    for (record, price) in cards {
        let _ = write!(out, "<div class=\"col\">{}</div>", product_card(record, &price));
    }
    out.push_str("</div>");
    out
}

pub fn product_detail(record: &DisplayRecord, price: &str) -> String {
    format!(
        "<h1>{name}</h1>\
<img src=\"{img}\" width=\"500\" height=\"300\" alt=\"Product image\" class=\"card-img-top\">\
<div class=\"card p-3\">\
<h2>Description:</h2><h4 class=\"text-center\">{desc}</h4>\
<h2>Price:</h2><h4 class=\"text-center\">{price}</h4>\
<h2>Sold:</h2><h4 class=\"text-center\">{sold}</h4>\
<h2>Stock:</h2><h4 class=\"text-center\">{stock}</h4></div>",
        name = escape_html(&record.name),
        img = escape_html(&record.image_url),
        desc = escape_html(&record.description),
        price = escape_html(price),
        sold = record.sold,
        stock = record.stock,
    )
}
