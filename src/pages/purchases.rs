//! Purchase history page: past orders, newest first.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::{Purchase, PurchaseItem};
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::format::{format_date, format_price};

/// Read-only list of completed orders for the signed-in user.
#[component]
pub fn PurchasesPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let navigate = use_navigate();

    let user_id = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let user = session::refresh(session_state);
        let id = user.as_ref().and_then(|u| u.id).filter(|id| *id != 0);
        if id.is_none() {
            toasts::show_message(
                toasts,
                "Please login to view your purchases",
                ToastKind::Warning,
            );
            navigate("/auth", NavigateOptions::default());
            return;
        }
        user_id.set(id);
    });

    let purchases = LocalResource::new(move || {
        let id = user_id.get();
        async move {
            match id {
                Some(id) => api::fetch_purchase_history(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="purchases-page">
            <NavBar/>
            <h1>"Purchase History"</h1>

            <Suspense fallback=move || view! { <p class="purchases-page__loading">"Loading purchases..."</p> }>
                {move || {
                    purchases
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <div class="purchases-page__empty">
                                            <p>"You haven't made any purchases yet"</p>
                                            <a href="/" class="btn btn--primary">
                                                "Browse the marketplace"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="purchases-page__list">
                                            {list
                                                .into_iter()
                                                .map(|purchase| view! { <PurchaseCard purchase=purchase/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="purchases-page__empty">"Failed to load purchase history"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One past order with its line items and total.
#[component]
fn PurchaseCard(purchase: Purchase) -> impl IntoView {
    let order_label = format!("Order #{}", purchase.id);
    let date = purchase
        .purchase_date
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let total = format_price(purchase.total_amount.unwrap_or(0.0));

    view! {
        <div class="purchase-card">
            <div class="purchase-card__header">
                <span class="purchase-card__order">{order_label}</span>
                <span class="purchase-card__date">{date}</span>
            </div>
            <div class="purchase-card__items">
                {purchase
                    .items
                    .into_iter()
                    .map(|item| view! { <PurchaseRow item=item/> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="purchase-card__footer">
                <span>"Total"</span>
                <span class="purchase-card__total">{total}</span>
            </div>
        </div>
    }
}

#[component]
fn PurchaseRow(item: PurchaseItem) -> impl IntoView {
    let title = item
        .product_title
        .clone()
        .unwrap_or_else(|| "Unknown Product".to_owned());
    let quantity = format!("x{}", item.quantity.max(1));
    let price = format_price(item.price_at_purchase.unwrap_or(0.0));

    view! {
        <div class="purchase-row">
            <span class="purchase-row__title">{title}</span>
            <span class="purchase-row__quantity">{quantity}</span>
            <span class="purchase-row__price">{price}</span>
        </div>
    }
}
