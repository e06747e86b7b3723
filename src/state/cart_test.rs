use super::*;

fn item(price: Option<f64>, quantity: i32) -> CartItem {
    CartItem {
        id: 1,
        product_id: Some(10),
        product_title: Some("Lamp".to_owned()),
        product_price: price,
        quantity,
        ..CartItem::default()
    }
}

#[test]
fn empty_cart_sums_to_zero() {
    let cart = CartState::default();
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert!(cart.subtotal().abs() < f64::EPSILON);
}

#[test]
fn item_count_sums_quantities() {
    let cart = CartState::new(vec![item(Some(10.0), 2), item(Some(5.0), 3)]);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn subtotal_multiplies_price_by_quantity() {
    let cart = CartState::new(vec![item(Some(10.5), 2), item(Some(10.0), 1)]);
    assert!((cart.subtotal() - 31.0).abs() < 1e-9);
}

#[test]
fn unpriced_items_count_as_zero() {
    let cart = CartState::new(vec![item(None, 4), item(Some(2.5), 2)]);
    assert_eq!(cart.item_count(), 6);
    assert!((cart.subtotal() - 5.0).abs() < 1e-9);
}

#[test]
fn badge_defaults_to_zero() {
    assert_eq!(CartBadge::default().count, 0);
}
