//! Cart arithmetic and the shared nav-bar badge.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::net::types::CartItem;

/// The loaded cart line items, with summary arithmetic.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }

    /// Sum of price x quantity; items with no price count as zero.
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product_price.unwrap_or(0.0) * f64::from(i.quantity))
            .sum()
    }
}

/// Cart quantity shown in the nav bar, shared across pages so mutations
/// anywhere update the badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartBadge {
    pub count: u32,
}

/// Refetch the badge count for a user. Fire-and-forget; failures leave
/// the badge unchanged.
pub fn refresh_badge(badge: RwSignal<CartBadge>, user_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Ok(count) = crate::net::api::fetch_cart_count(user_id).await {
                badge.set(CartBadge { count });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (badge, user_id);
    }
}
