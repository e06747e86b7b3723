//! REST API client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend signals failure two ways: non-2xx statuses and 2xx bodies
//! with `success: false`. Both are folded into a single [`ApiError`] here
//! so callers never branch on status codes or probe envelope fields.
//! Transport failures and undecodable bodies get their own variants.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::net::types::{
    Ack, AuthResponse, CartCountResponse, CartItem, CartItemsResponse, Product, ProductEnvelope,
    ProductForm, Purchase, PurchasesResponse, UserInfo,
};

/// Fixed prefix for every backend path.
pub const API_ROOT: &str = "/api";

/// HTTP methods used by the backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Normalized failure for every network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; `message` is the server's `message` field when
    /// present, else `"HTTP error: <status>"`.
    Status { status: u16, message: String },
    /// 2xx response whose envelope carried `success: false`.
    Api { message: String },
    /// Transport-level failure (fetch rejection, offline, SSR stub).
    Network(String),
    /// Body did not decode into the expected shape.
    Decode(String),
}

impl ApiError {
    /// User-facing message for toasts.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Status { message, .. } | ApiError::Api { message } => message,
            ApiError::Network(message) | ApiError::Decode(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

/// Prefix `API_ROOT` onto a relative path. Idempotent: already-prefixed
/// paths pass through unchanged.
pub fn api_path(path: &str) -> String {
    if path.starts_with(API_ROOT) {
        path.to_owned()
    } else {
        format!("{API_ROOT}{path}")
    }
}

/// Map a non-2xx response body to an [`ApiError::Status`].
pub fn status_error(status: u16, body: &serde_json::Value) -> ApiError {
    let message = body
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map_or_else(|| format!("HTTP error: {status}"), str::to_owned);
    ApiError::Status { status, message }
}

/// Fold an envelope's `success`/`message` pair into the error channel.
fn ensure_success(success: bool, message: Option<String>, fallback: &str) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Api {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        })
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a JSON request and return the parsed body.
///
/// Sets a JSON content type, serializes `body` for non-GET methods, and
/// parses the response body regardless of status. Non-2xx statuses become
/// [`ApiError::Status`]. No retry, no deduplication, no timeout; callers
/// may race this against their own timeout future.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// unparseable success body.
pub async fn call(
    path: &str,
    method: Method,
    body: Option<serde_json::Value>,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::RequestBuilder;

        let url = api_path(path);
        let builder = RequestBuilder::new(&url).method(gloo_method(method));
        let request = match body {
            Some(ref payload) if method != Method::Get => builder
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            _ => builder
                .header("Content-Type", "application/json")
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let parsed = response.json::<serde_json::Value>().await;

        if !(200..300).contains(&status) {
            let body = parsed.unwrap_or(serde_json::Value::Null);
            return Err(status_error(status, &body));
        }
        parsed.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, method, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(call(path, Method::Get, None).await?)
}

// -----------------------------------------------------------------
// Auth
// -----------------------------------------------------------------

/// Log in with email and password; returns the session record on success.
///
/// # Errors
///
/// `ApiError::Api` with the server message when credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<UserInfo, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    let resp: AuthResponse = decode(call("/auth/login", Method::Post, Some(body)).await?)?;
    ensure_success(
        resp.success && resp.user.is_some(),
        resp.message,
        "Login failed. Please check your credentials.",
    )?;
    Ok(resp.user.unwrap_or_default())
}

/// Register a new account; returns the session record on success.
///
/// # Errors
///
/// `ApiError::Api` with the server message when registration is rejected.
pub async fn register(
    display_name: &str,
    email: &str,
    password: &str,
    profile_image_url: Option<&str>,
) -> Result<UserInfo, ApiError> {
    let body = serde_json::json!({
        "displayName": display_name,
        "email": email,
        "password": password,
        "profileImageUrl": profile_image_url,
    });
    let resp: AuthResponse = decode(call("/auth/register", Method::Post, Some(body)).await?)?;
    ensure_success(
        resp.success && resp.user.is_some(),
        resp.message,
        "Registration failed. Please try again.",
    )?;
    Ok(resp.user.unwrap_or_default())
}

// -----------------------------------------------------------------
// Products
// -----------------------------------------------------------------

/// Fetch all active product listings.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/products").await
}

/// Fetch one product by id.
pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    let env: ProductEnvelope = get_json(&format!("/products/{id}")).await?;
    ensure_success(
        env.success && env.product.is_some(),
        env.message,
        "Product not found",
    )?;
    Ok(env.product.unwrap_or_default())
}

/// Fetch the fixed category list for listing forms and filters.
pub async fn fetch_categories() -> Result<Vec<String>, ApiError> {
    get_json("/products/categories").await
}

/// Fetch the fixed condition-type list for listing forms.
pub async fn fetch_conditions() -> Result<Vec<String>, ApiError> {
    get_json("/products/conditions").await
}

/// Fetch all listings owned by a seller.
pub async fn fetch_my_listings(seller_id: i64) -> Result<Vec<Product>, ApiError> {
    get_json(&format!("/products/user/{seller_id}")).await
}

/// Create a new listing for a seller.
pub async fn create_product(seller_id: i64, form: &ProductForm) -> Result<(), ApiError> {
    let body = serde_json::to_value(form).map_err(|e| ApiError::Decode(e.to_string()))?;
    let ack: Ack = decode(
        call(
            &format!("/products?sellerId={seller_id}"),
            Method::Post,
            Some(body),
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Failed to add product")
}

/// Delete a listing owned by a seller.
pub async fn delete_product(id: i64, seller_id: i64) -> Result<(), ApiError> {
    let ack: Ack = decode(
        call(
            &format!("/products/{id}?sellerId={seller_id}"),
            Method::Delete,
            None,
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Failed to delete listing")
}

// -----------------------------------------------------------------
// Cart
// -----------------------------------------------------------------

/// Fetch the user's cart line items.
pub async fn fetch_cart_items(user_id: i64) -> Result<Vec<CartItem>, ApiError> {
    let resp: CartItemsResponse = get_json(&format!("/cart/items/{user_id}")).await?;
    ensure_success(resp.success, resp.message, "Failed to load cart items")?;
    Ok(resp.cart_items)
}

/// Add a product to the cart.
pub async fn add_to_cart(user_id: i64, product_id: i64, quantity: i32) -> Result<(), ApiError> {
    let ack: Ack = decode(
        call(
            &format!("/cart/add?userId={user_id}&productId={product_id}&quantity={quantity}"),
            Method::Post,
            None,
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Failed to add item to cart")
}

/// Set the quantity of a cart line item.
pub async fn update_cart_quantity(
    cart_item_id: i64,
    user_id: i64,
    quantity: i32,
) -> Result<(), ApiError> {
    let ack: Ack = decode(
        call(
            &format!("/cart/update/{cart_item_id}?userId={user_id}&quantity={quantity}"),
            Method::Put,
            None,
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Failed to update quantity")
}

/// Remove one line item from the cart.
pub async fn remove_cart_item(cart_item_id: i64, user_id: i64) -> Result<(), ApiError> {
    let ack: Ack = decode(
        call(
            &format!("/cart/remove/{cart_item_id}?userId={user_id}"),
            Method::Delete,
            None,
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Failed to remove item")
}

/// Remove every line item from the cart.
pub async fn clear_cart(user_id: i64) -> Result<(), ApiError> {
    let ack: Ack = decode(call(&format!("/cart/clear/{user_id}"), Method::Delete, None).await?)?;
    ensure_success(ack.success, ack.message, "Failed to clear cart")
}

/// Fetch the total quantity across the user's cart, for the nav badge.
pub async fn fetch_cart_count(user_id: i64) -> Result<u32, ApiError> {
    let resp: CartCountResponse = get_json(&format!("/cart/count/{user_id}")).await?;
    Ok(resp.count)
}

// -----------------------------------------------------------------
// Purchases
// -----------------------------------------------------------------

/// Convert the user's cart into a completed purchase.
pub async fn checkout(user_id: i64) -> Result<(), ApiError> {
    let ack: Ack = decode(
        call(
            &format!("/purchases/checkout/{user_id}"),
            Method::Post,
            None,
        )
        .await?,
    )?;
    ensure_success(ack.success, ack.message, "Checkout failed")
}

/// Fetch the user's purchase history, newest first.
pub async fn fetch_purchase_history(user_id: i64) -> Result<Vec<Purchase>, ApiError> {
    let resp: PurchasesResponse = get_json(&format!("/purchases/history/{user_id}")).await?;
    ensure_success(resp.success, resp.message, "Failed to load purchases")?;
    Ok(resp.purchases)
}

// -----------------------------------------------------------------
// Profile
// -----------------------------------------------------------------

/// Fetch the user's profile record.
pub async fn fetch_profile(user_id: i64) -> Result<UserInfo, ApiError> {
    let resp: AuthResponse = get_json(&format!("/dashboard/profile?userId={user_id}")).await?;
    ensure_success(
        resp.success && resp.user.is_some(),
        resp.message,
        "Failed to load profile",
    )?;
    Ok(resp.user.unwrap_or_default())
}

/// Save profile edits; returns the updated record when the server echoes one.
pub async fn update_profile(
    user_id: i64,
    display_name: &str,
    email: &str,
    profile_image_url: Option<&str>,
) -> Result<Option<UserInfo>, ApiError> {
    let body = serde_json::json!({
        "userId": user_id,
        "displayName": display_name,
        "email": email,
        "profileImageUrl": profile_image_url,
    });
    let resp: AuthResponse = decode(call("/dashboard/profile", Method::Put, Some(body)).await?)?;
    ensure_success(resp.success, resp.message, "Failed to update profile")?;
    Ok(resp.user)
}
