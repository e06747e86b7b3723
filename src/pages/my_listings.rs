//! Seller's own listings with delete support.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::Product;
use crate::state::confirm::ConfirmState;
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::format::format_price;

/// The signed-in user's own product listings. Deleting asks for
/// confirmation first and reloads the list on success.
#[component]
pub fn MyListingsPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let confirm_state = expect_context::<RwSignal<ConfirmState>>();
    let navigate = use_navigate();

    let user_id = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let user = session::refresh(session_state);
        let id = user.as_ref().and_then(|u| u.id).filter(|id| *id != 0);
        if id.is_none() {
            toasts::show_message(
                toasts,
                "Please login to view your listings",
                ToastKind::Warning,
            );
            navigate("/auth", NavigateOptions::default());
            return;
        }
        user_id.set(id);
    });

    let listings = LocalResource::new(move || {
        let id = user_id.get();
        async move {
            match id {
                Some(id) => api::fetch_my_listings(id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let delete_listing = Callback::new(move |product_id: i64| {
        let Some(uid) = user_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let confirmed = crate::state::confirm::confirm_action(
                    confirm_state,
                    "Are you sure you want to delete this listing? This action cannot be undone.",
                    "Delete Listing",
                )
                .await;
                if !confirmed {
                    return;
                }
                match api::delete_product(product_id, uid).await {
                    Ok(()) => {
                        toasts::show_message(
                            toasts,
                            "Listing deleted successfully",
                            ToastKind::Success,
                        );
                        listings.refetch();
                    }
                    Err(err) => {
                        toasts::show_message(toasts, err.message().to_owned(), ToastKind::Error);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, uid, confirm_state);
        }
    });

    view! {
        <div class="my-listings-page">
            <NavBar/>
            <div class="my-listings-page__header">
                <h1>"My Listings"</h1>
                <a href="/sell" class="btn btn--primary">
                    "+ Add Product"
                </a>
            </div>

            <Suspense fallback=move || view! { <p class="my-listings-page__loading">"Loading listings..."</p> }>
                {move || {
                    listings
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <div class="my-listings-page__empty">
                                            <p>"You haven't listed anything yet"</p>
                                            <a href="/sell" class="btn btn--primary">
                                                "List your first item"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="my-listings-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|product| {
                                                    view! {
                                                        <ListingCard
                                                            product=product
                                                            on_delete=delete_listing
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
                                    <p class="my-listings-page__empty">"Failed to load your listings"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One listing owned by the current user, with a delete control.
#[component]
fn ListingCard(product: Product, on_delete: Callback<i64>) -> impl IntoView {
    let product_id = product.id;
    let title = product.title.clone();
    let detail_href = format!("/products/{product_id}");
    let category = product
        .category
        .clone()
        .unwrap_or_else(|| "General".to_owned());
    let price = format_price(product.price.unwrap_or(0.0));
    let quantity = format!("{} in stock", product.quantity.unwrap_or(0).max(0));

    let image = product.image_url.clone().map_or_else(
        || view! { <div class="listing-card__image listing-card__image--empty"></div> }.into_any(),
        |url| {
            let alt = title.clone();
            view! { <img class="listing-card__image" src=url alt=alt/> }.into_any()
        },
    );

    view! {
        <div class="listing-card">
            <a href=detail_href>{image}</a>
            <div class="listing-card__details">
                <h3 class="listing-card__title">{title}</h3>
                <span class="listing-card__category">{category}</span>
                <span class="listing-card__price">{price}</span>
                <span class="listing-card__quantity">{quantity}</span>
            </div>
            <button class="btn listing-card__delete" on:click=move |_| on_delete.run(product_id)>
                "Delete"
            </button>
        </div>
    }
}
