//! Marketplace page: browse, search, and filter product listings.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::cart::CartBadge;
use crate::state::catalog::{self, ALL_CATEGORIES};
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};

/// Product grid with keyword search and category filter chips.
/// Filtering is purely client-side over the loaded list.
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let badge = expect_context::<RwSignal<CartBadge>>();

    // Fresh storage read on entry; browsing works logged out, so no redirect.
    Effect::new(move || {
        session::refresh(session_state);
    });

    let products = LocalResource::new(|| api::fetch_products());
    let categories = LocalResource::new(|| api::fetch_categories());

    let keyword = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORIES.to_owned());

    let on_add_to_cart = Callback::new(move |product_id: i64| {
        let Some(user_id) = session_state.get_untracked().user_id() else {
            toasts::show_message(
                toasts,
                "Please login to add items to cart",
                ToastKind::Warning,
            );
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::add_to_cart(user_id, product_id, 1).await {
                    Ok(()) => {
                        toasts::show_message(toasts, "Product added to cart!", ToastKind::Success);
                        crate::state::cart::refresh_badge(badge, user_id);
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, product_id, badge);
        }
    });

    view! {
        <div class="marketplace-page">
            <NavBar/>

            <div class="marketplace-page__controls">
                <input
                    class="marketplace-page__search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />

                <div class="marketplace-page__filters">
                    <FilterChip label="All" value=ALL_CATEGORIES.to_owned() selected=category/>
                    <Suspense fallback=|| ()>
                        {move || {
                            categories
                                .get()
                                .map(|result| {
                                    result
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|name| {
                                            view! {
                                                <FilterChip
                                                    label=""
                                                    value=name
                                                    selected=category
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </div>
            </div>

            <Suspense fallback=move || view! { <p class="marketplace-page__loading">"Loading products..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let visible: Vec<_> = catalog::filter_products(
                                        &list,
                                        &keyword.get(),
                                        &category.get(),
                                    )
                                    .into_iter()
                                    .cloned()
                                    .collect();
                                if visible.is_empty() {
                                    view! {
                                        <p class="marketplace-page__empty">"No products found"</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="marketplace-page__grid">
                                            {visible
                                                .into_iter()
                                                .map(|product| {
                                                    view! {
                                                        <ProductCard
                                                            product=product
                                                            on_add_to_cart=on_add_to_cart
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => {
                                view! {
                                    <p class="marketplace-page__empty">
                                        "Failed to load products. Please try again."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Category filter button; the selected value highlights its chip.
#[component]
fn FilterChip(label: &'static str, value: String, selected: RwSignal<String>) -> impl IntoView {
    let display = if label.is_empty() {
        value.clone()
    } else {
        label.to_owned()
    };
    let this = value.clone();
    let active = move || selected.get() == this;

    view! {
        <button
            class="filter-chip"
            class:active=active
            on:click=move |_| selected.set(value.clone())
        >
            {display}
        </button>
    }
}
