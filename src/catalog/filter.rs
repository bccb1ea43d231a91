use crate::catalog::models::Product;

/// Keep the products whose embedded `category._id` equals `category_id`.
///
/// Relative order is preserved and nothing is deduplicated. The id is
/// compared verbatim; whether it names a real category is the catalog
/// service's concern.
pub fn filter_by_category(products: Vec<Product>, category_id: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category_id() == category_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Category;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            category: Category {
                id: category.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn keeps_only_matching_category() {
        let products = vec![product("a", "X"), product("b", "Y")];
        let out = filter_by_category(products, "X");
        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let products = vec![
            product("c", "X"),
            product("a", "Y"),
            product("b", "X"),
            product("c", "X"),
        ];
        let out = filter_by_category(products.clone(), "X");
        assert_eq!(ids(&out), vec!["c", "b", "c"]);
        assert!(out.len() <= products.len());
        assert!(out.iter().all(|p| p.category_id() == "X"));
    }

    #[test]
    fn filtering_twice_is_a_no_op() {
        let products = vec![product("a", "X"), product("b", "Y"), product("c", "X")];
        let once = filter_by_category(products, "X");
        let twice = filter_by_category(once.clone(), "X");
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let products = vec![product("a", "X"), product("b", "Y")];
        assert!(filter_by_category(products, "Z").is_empty());
        assert!(filter_by_category(Vec::new(), "X").is_empty());
    }
}
