//! Product card used by the marketplace grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::format_price;

/// Card linking to the product detail page, with an add-to-cart shortcut.
#[component]
pub fn ProductCard(product: Product, on_add_to_cart: Callback<i64>) -> impl IntoView {
    let id = product.id;
    let title = product.title.clone();
    let category = product.category.clone().unwrap_or_else(|| "General".to_owned());
    let price = format_price(product.price.unwrap_or(0.0));
    let detail_href = format!("/products/{id}");

    let image = product.image_url.clone().map_or_else(
        || view! { <div class="product-card__image product-card__image--empty"></div> }.into_any(),
        |url| {
            let alt = product.title.clone();
            view! { <img class="product-card__image" src=url alt=alt/> }.into_any()
        },
    );

    view! {
        <div class="product-card">
            <a href=detail_href.clone() class="product-card__media">
                {image}
            </a>
            <div class="product-card__body">
                <a href=detail_href class="product-card__title">
                    {title}
                </a>
                <span class="product-card__category">{category}</span>
                <span class="product-card__price">{price}</span>
            </div>
            <button class="btn btn--primary product-card__add" on:click=move |_| {
                on_add_to_cart.run(id);
            }>
                "Add to Cart"
            </button>
        </div>
    }
}
