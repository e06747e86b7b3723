use super::*;

fn product(title: &str, category: &str, brand: Option<&str>, description: Option<&str>) -> Product {
    Product {
        id: 1,
        title: title.to_owned(),
        category: Some(category.to_owned()),
        brand: brand.map(str::to_owned),
        description: description.map(str::to_owned),
        ..Product::default()
    }
}

#[test]
fn all_category_with_empty_keyword_matches_everything() {
    let p = product("Vintage Lamp", "Furniture", None, None);
    assert!(matches(&p, "", ALL_CATEGORIES));
    assert!(matches(&p, "   ", ALL_CATEGORIES));
}

#[test]
fn category_filter_is_exact() {
    let p = product("Vintage Lamp", "Furniture", None, None);
    assert!(matches(&p, "", "Furniture"));
    assert!(!matches(&p, "", "Electronics"));
}

#[test]
fn keyword_matches_title_case_insensitively() {
    let p = product("Vintage Lamp", "Furniture", None, None);
    assert!(matches(&p, "LAMP", ALL_CATEGORIES));
    assert!(matches(&p, "vintage", ALL_CATEGORIES));
    assert!(!matches(&p, "chair", ALL_CATEGORIES));
}

#[test]
fn keyword_matches_description_and_brand() {
    let p = product(
        "Lamp",
        "Furniture",
        Some("Philips"),
        Some("Warm brass finish"),
    );
    assert!(matches(&p, "brass", ALL_CATEGORIES));
    assert!(matches(&p, "philips", ALL_CATEGORIES));
}

#[test]
fn keyword_and_category_must_both_match() {
    let p = product("Vintage Lamp", "Furniture", None, None);
    assert!(!matches(&p, "lamp", "Electronics"));
    assert!(matches(&p, "lamp", "Furniture"));
}

#[test]
fn product_without_category_only_matches_all() {
    let mut p = product("Lamp", "Furniture", None, None);
    p.category = None;
    assert!(matches(&p, "", ALL_CATEGORIES));
    assert!(!matches(&p, "", "Furniture"));
}

#[test]
fn filter_products_keeps_order() {
    let products = vec![
        product("Desk Lamp", "Furniture", None, None),
        product("Phone", "Electronics", None, None),
        product("Floor Lamp", "Furniture", None, None),
    ];
    let hits = filter_products(&products, "lamp", ALL_CATEGORIES);
    let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Desk Lamp", "Floor Lamp"]);
}
