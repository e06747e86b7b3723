use super::*;

// =============================================================
// UserInfo
// =============================================================

#[test]
fn user_info_deserializes_camel_case() {
    let user: UserInfo = serde_json::from_str(
        r#"{"id":7,"displayName":"Ana","email":"a@b.com","profileImageUrl":null}"#,
    )
    .unwrap();
    assert_eq!(user.id, Some(7));
    assert_eq!(user.display_name.as_deref(), Some("Ana"));
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert!(user.profile_image_url.is_none());
}

#[test]
fn user_info_tolerates_missing_fields() {
    let user: UserInfo = serde_json::from_str("{}").unwrap();
    assert!(user.id.is_none());
    assert!(user.display_name.is_none());
}

#[test]
fn user_info_round_trips() {
    let user = UserInfo {
        id: Some(3),
        display_name: Some("Sam".to_owned()),
        email: Some("sam@example.com".to_owned()),
        profile_image_url: Some("data:image/png;base64,AAAA".to_owned()),
    };
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("displayName"));
    assert!(json.contains("profileImageUrl"));
    let back: UserInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_success_with_user() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"success":true,"message":"Login successful","token":"t","user":{"id":1,"displayName":"Ana"}}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.user.unwrap().id, Some(1));
}

#[test]
fn auth_response_failure_without_user() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
    assert!(resp.user.is_none());
}

// =============================================================
// Product and envelopes
// =============================================================

#[test]
fn product_deserializes_with_seller() {
    let product: Product = serde_json::from_str(
        r#"{
            "id": 42,
            "title": "Vintage Lamp",
            "description": "A lamp",
            "category": "Furniture",
            "price": 24.99,
            "quantity": 1,
            "conditionType": "USED_GOOD",
            "imageUrl": null,
            "seller": {"id": 2, "displayName": "Sam"}
        }"#,
    )
    .unwrap();
    assert_eq!(product.id, 42);
    assert_eq!(product.price, Some(24.99));
    assert_eq!(product.condition_type.as_deref(), Some("USED_GOOD"));
    assert_eq!(product.seller.unwrap().id, Some(2));
}

#[test]
fn product_envelope_carries_product() {
    let env: ProductEnvelope = serde_json::from_str(
        r#"{"success":true,"product":{"id":1,"title":"Chair"}}"#,
    )
    .unwrap();
    assert!(env.success);
    assert_eq!(env.product.unwrap().title, "Chair");
}

#[test]
fn product_form_skips_absent_optionals() {
    let form = ProductForm {
        title: "Bike".to_owned(),
        category: "Sports".to_owned(),
        price: 120.0,
        quantity: 1,
        ..ProductForm::default()
    };
    let json = serde_json::to_string(&form).unwrap();
    assert!(json.contains("\"title\":\"Bike\""));
    assert!(!json.contains("imageUrl"));
    assert!(!json.contains("conditionType"));
}

// =============================================================
// Cart
// =============================================================

#[test]
fn cart_items_response_deserializes() {
    let resp: CartItemsResponse = serde_json::from_str(
        r#"{
            "success": true,
            "cartItems": [
                {"id": 5, "productId": 42, "productTitle": "Lamp", "productPrice": 10.5, "quantity": 2}
            ]
        }"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.cart_items.len(), 1);
    assert_eq!(resp.cart_items[0].product_price, Some(10.5));
    assert_eq!(resp.cart_items[0].quantity, 2);
}

#[test]
fn cart_count_defaults_to_zero() {
    let resp: CartCountResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert_eq!(resp.count, 0);
}

// =============================================================
// Purchases
// =============================================================

#[test]
fn purchases_response_with_nested_items() {
    let resp: PurchasesResponse = serde_json::from_str(
        r#"{
            "success": true,
            "purchases": [{
                "id": 9,
                "totalAmount": 31.0,
                "purchaseDate": "2024-01-05T14:30:00",
                "status": "COMPLETED",
                "items": [
                    {"id": 1, "productTitle": "Lamp", "quantity": 2, "priceAtPurchase": 10.5},
                    {"id": 2, "productTitle": "Book", "quantity": 1, "priceAtPurchase": 10.0}
                ]
            }]
        }"#,
    )
    .unwrap();
    let purchase = &resp.purchases[0];
    assert_eq!(purchase.total_amount, Some(31.0));
    assert_eq!(purchase.items.len(), 2);
    assert_eq!(purchase.items[0].price_at_purchase, Some(10.5));
}

#[test]
fn ack_defaults_to_failure() {
    let ack: Ack = serde_json::from_str("{}").unwrap();
    assert!(!ack.success);
    assert!(ack.message.is_none());
}
