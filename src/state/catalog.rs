//! Client-side catalog filtering for the marketplace page.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Product;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Keyword + category filter over the loaded product list.
///
/// The keyword matches title, description, or brand, case-insensitively.
/// An empty keyword matches everything.
pub fn matches(product: &Product, keyword: &str, category: &str) -> bool {
    let category_match = category == ALL_CATEGORIES
        || product.category.as_deref() == Some(category);

    let keyword = keyword.trim().to_lowercase();
    let keyword_match = keyword.is_empty()
        || product.title.to_lowercase().contains(&keyword)
        || field_contains(product.description.as_deref(), &keyword)
        || field_contains(product.brand.as_deref(), &keyword);

    category_match && keyword_match
}

fn field_contains(field: Option<&str>, keyword: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(keyword))
}

/// Apply [`matches`] over a product list.
pub fn filter_products<'a>(
    products: &'a [Product],
    keyword: &str,
    category: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, keyword, category))
        .collect()
}
