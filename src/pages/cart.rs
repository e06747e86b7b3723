//! Shopping cart page: line items, quantity controls, clear, checkout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::CartItem;
use crate::state::cart::{self, CartBadge, CartState};
use crate::state::confirm::ConfirmState;
use crate::state::loading::LoadingState;
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::format::format_price;

/// Cart page. Redirects to auth when no session exists; every mutation
/// reloads the line items from the backend rather than patching locally.
#[component]
pub fn CartPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let confirm_state = expect_context::<RwSignal<ConfirmState>>();
    let loading_state = expect_context::<RwSignal<LoadingState>>();
    let badge = expect_context::<RwSignal<CartBadge>>();
    let navigate = use_navigate();

    let user_id = RwSignal::new(None::<i64>);

    // Auth check: fresh storage read, warn + redirect when logged out.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let user = session::refresh(session_state);
            let id = user.as_ref().and_then(|u| u.id).filter(|id| *id != 0);
            if id.is_none() {
                toasts::show_message(
                    toasts,
                    "Please login to view your cart",
                    ToastKind::Warning,
                );
                navigate("/auth", NavigateOptions::default());
                return;
            }
            user_id.set(id);
        });
    }

    let items = LocalResource::new(move || {
        let id = user_id.get();
        async move {
            match id {
                Some(id) => api::fetch_cart_items(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let reload = Callback::new(move |()| {
        items.refetch();
        if let Some(id) = user_id.get_untracked() {
            cart::refresh_badge(badge, id);
        }
    });

    // Quantities at or below zero remove the line item instead.
    let set_quantity = Callback::new(move |(item_id, quantity): (i64, i32)| {
        let Some(uid) = user_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = if quantity <= 0 {
                    api::remove_cart_item(item_id, uid).await.map(|()| "Item removed from cart")
                } else {
                    api::update_cart_quantity(item_id, uid, quantity)
                        .await
                        .map(|()| "Quantity updated")
                };
                match result {
                    Ok(message) => {
                        toasts::show_message(toasts, message, ToastKind::Success);
                        reload.run(());
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (item_id, quantity, uid, reload);
        }
    });

    let remove_item = Callback::new(move |item_id: i64| {
        set_quantity.run((item_id, 0));
    });

    let clear_cart = move |_| {
        let Some(uid) = user_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let confirmed = crate::state::confirm::confirm_action(
                    confirm_state,
                    "Are you sure you want to clear your cart? This action cannot be undone.",
                    "Clear Cart",
                )
                .await;
                if !confirmed {
                    return;
                }
                match api::clear_cart(uid).await {
                    Ok(()) => {
                        toasts::show_message(toasts, "Cart cleared", ToastKind::Success);
                        reload.run(());
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (uid, confirm_state);
        }
    };

    let checkout_pending = RwSignal::new(false);
    let checkout = {
        let navigate = navigate.clone();
        move |_| {
            let Some(uid) = user_id.get_untracked() else {
                return;
            };
            let empty = items
                .get_untracked()
                .map(|r| r.map_or(true, |list| list.is_empty()))
                .unwrap_or(true);
            if empty {
                toasts::show_message(toasts, "Your cart is empty", ToastKind::Warning);
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                checkout_pending.set(true);
                crate::state::loading::begin_loading(loading_state);
                leptos::task::spawn_local(async move {
                    let result = api::checkout(uid).await;
                    crate::state::loading::end_loading(loading_state);
                    match result {
                        Ok(()) => {
                            toasts::show_message(
                                toasts,
                                "Purchase completed successfully!",
                                ToastKind::Success,
                            );
                            cart::refresh_badge(badge, uid);
                            crate::util::delay::sleep_ms(2000).await;
                            navigate("/purchases", NavigateOptions::default());
                        }
                        Err(err) => {
                            toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                        }
                    }
                    checkout_pending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, uid, loading_state);
            }
        }
    };

    view! {
        <div class="cart-page">
            <NavBar/>
            <h1>"Your Cart"</h1>

            <Suspense fallback=move || view! { <p class="cart-page__loading">"Loading cart..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let summary = CartState::new(list.clone());
                                if summary.is_empty() {
                                    view! {
                                        <div class="cart-page__empty">
                                            <p>"Your cart is empty"</p>
                                            <a href="/" class="btn btn--primary">
                                                "Browse the marketplace"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="cart-page__items">
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    view! {
                                                        <CartRow
                                                            item=item
                                                            set_quantity=set_quantity
                                                            remove_item=remove_item
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <CartSummary summary=summary/>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="cart-page__empty">"Failed to load cart items"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="cart-page__actions">
                <button class="btn" on:click=clear_cart>
                    "Clear Cart"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || checkout_pending.get()
                    on:click=checkout
                >
                    "Checkout"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartRow(
    item: CartItem,
    set_quantity: Callback<(i64, i32)>,
    remove_item: Callback<i64>,
) -> impl IntoView {
    let item_id = item.id;
    let quantity = item.quantity;
    let title = item
        .product_title
        .clone()
        .unwrap_or_else(|| "Unknown Product".to_owned());
    let category = item
        .product_category
        .clone()
        .unwrap_or_else(|| "General".to_owned());
    let price = format_price(item.product_price.unwrap_or(0.0));

    let image = item.product_image_url.clone().map_or_else(
        || view! { <div class="cart-row__image cart-row__image--empty"></div> }.into_any(),
        |url| {
            let alt = title.clone();
            view! { <img class="cart-row__image" src=url alt=alt/> }.into_any()
        },
    );

    view! {
        <div class="cart-row">
            {image}
            <div class="cart-row__details">
                <h3 class="cart-row__title">{title}</h3>
                <span class="cart-row__category">{category}</span>
                <span class="cart-row__price">{price}</span>
            </div>
            <div class="cart-row__controls">
                <button
                    class="quantity-btn"
                    on:click=move |_| set_quantity.run((item_id, quantity - 1))
                >
                    "-"
                </button>
                <span class="cart-row__quantity">{quantity}</span>
                <button
                    class="quantity-btn"
                    on:click=move |_| set_quantity.run((item_id, quantity + 1))
                >
                    "+"
                </button>
                <button class="btn cart-row__remove" on:click=move |_| remove_item.run(item_id)>
                    "Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartSummary(summary: CartState) -> impl IntoView {
    let count = summary.item_count();
    let subtotal = format_price(summary.subtotal());
    let total = subtotal.clone();

    view! {
        <div class="cart-summary">
            <div class="cart-summary__row">
                <span>"Items"</span>
                <span>{count}</span>
            </div>
            <div class="cart-summary__row">
                <span>"Subtotal"</span>
                <span>{subtotal}</span>
            </div>
            <div class="cart-summary__row cart-summary__row--total">
                <span>"Total"</span>
                <span>{total}</span>
            </div>
        </div>
    }
}
