//! Product detail page with quantity selector and add-to-cart.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::Product;
use crate::state::cart::CartBadge;
use crate::state::session::{self, SessionState};
use crate::state::toasts::{self, ToastKind, ToastsState};
use crate::util::format::format_price;

/// Detail view for one listing, loaded from the route id.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    Effect::new(move || {
        session::refresh(session_state);
    });

    let product_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    });

    let product = LocalResource::new(move || {
        let id = product_id.get();
        async move {
            match id {
                Some(id) => api::fetch_product(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <div class="product-detail-page">
            <NavBar/>

            <Suspense fallback=move || view! { <p class="product-detail-page__loading">"Loading product..."</p> }>
                {move || {
                    product
                        .get()
                        .map(|result| match result {
                            Ok(Some(product)) => view! { <ProductDetail product=product/> }.into_any(),
                            Ok(None) | Err(_) => {
                                view! {
                                    <p class="product-detail-page__empty">"Product not found"</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let badge = expect_context::<RwSignal<CartBadge>>();

    let quantity = RwSignal::new(1_i32);
    let product_id = product.id;

    let seller_name = product
        .seller
        .as_ref()
        .and_then(|s| s.display_name.clone())
        .unwrap_or_else(|| "Unknown seller".to_owned());
    let price = format_price(product.price.unwrap_or(0.0));
    let category = product.category.clone().unwrap_or_else(|| "General".to_owned());
    let condition = product.condition_type.clone();
    let description = product
        .description
        .clone()
        .unwrap_or_else(|| "No description provided.".to_owned());

    let decrease = move |_| quantity.update(|q| *q = (*q - 1).max(1));
    let increase = move |_| quantity.update(|q| *q += 1);

    let add_to_cart = move |_| {
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
            let count = quantity.get_untracked();
            leptos::task::spawn_local(async move {
                match api::add_to_cart(user_id, product_id, count).await {
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
            let _ = (user_id, badge, product_id);
        }
    };

    view! {
        <div class="product-detail">
            {product
                .image_url
                .clone()
                .map(|url| {
                    let alt = product.title.clone();
                    view! { <img class="product-detail__image" src=url alt=alt/> }
                })}

            <div class="product-detail__info">
                <h1>{product.title.clone()}</h1>
                <span class="product-detail__category">{category}</span>
                {condition
                    .map(|c| view! { <span class="product-detail__condition">{c}</span> })}
                <span class="product-detail__price">{price}</span>
                <p class="product-detail__description">{description}</p>
                <span class="product-detail__seller">{format!("Sold by {seller_name}")}</span>

                <div class="product-detail__controls">
                    <button class="quantity-btn" on:click=decrease>
                        "-"
                    </button>
                    <span class="product-detail__quantity">{move || quantity.get()}</span>
                    <button class="quantity-btn" on:click=increase>
                        "+"
                    </button>
                    <button class="btn btn--primary" on:click=add_to_cart>
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
