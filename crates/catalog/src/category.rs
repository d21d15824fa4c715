//! Category filtering helpers.

use crate::product::Product;

/// Sentinel category meaning "no filter". Prepended to every category list so
/// filtering UIs always have an identity option.
pub const CATEGORY_ALL: &str = "All";

/// Distinct non-empty categories in first-appearance order, with
/// [`CATEGORY_ALL`] prepended.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![CATEGORY_ALL.to_string()];
    for product in products {
        let category = product.category.as_str();
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// Products whose category equals `category`; identity for [`CATEGORY_ALL`].
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category == CATEGORY_ALL || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    #[test]
    fn all_sentinel_comes_first() {
        let categories = distinct_categories(&sample_catalog());
        assert_eq!(categories, ["All", "Electronics", "Home", "Sports"]);
    }

    #[test]
    fn empty_categories_are_skipped() {
        let mut products = sample_catalog();
        products[1].category = String::new();
        let categories = distinct_categories(&products);
        assert_eq!(categories, ["All", "Electronics", "Sports"]);
    }

    #[test]
    fn duplicates_collapse_to_first_appearance() {
        let mut products = sample_catalog();
        products[2].category = "Electronics".to_string();
        let categories = distinct_categories(&products);
        assert_eq!(categories, ["All", "Electronics", "Home"]);
    }

    #[test]
    fn filter_by_all_is_identity() {
        let products = sample_catalog();
        assert_eq!(filter_by_category(&products, CATEGORY_ALL).len(), products.len());
    }

    #[test]
    fn filter_matches_category_exactly() {
        let products = sample_catalog();
        let home = filter_by_category(&products, "Home");
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].name, "Coffee Maker");
        assert!(filter_by_category(&products, "Garden").is_empty());
    }
}
