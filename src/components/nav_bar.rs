//! Top navigation bar with cart badge and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::cart::{self, CartBadge};
use crate::state::session::{self, SessionState};

/// Site-wide header: page links, live cart count, and a logout button
/// when a session exists.
#[component]
pub fn NavBar() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let badge = expect_context::<RwSignal<CartBadge>>();
    let navigate = use_navigate();

    // Refetch the badge whenever the session changes (login, logout,
    // another page storing a fresh record).
    Effect::new(move || {
        if let Some(user_id) = session_state.get().user_id() {
            cart::refresh_badge(badge, user_id);
        } else {
            badge.set(CartBadge::default());
        }
    });

    let authenticated = move || session_state.get().is_authenticated();
    let count = move || badge.get().count;
    let has_items = move || count() > 0;

    let on_logout = move |_| {
        session::logout(session_state);
        navigate("/auth", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "EcoFinds"
            </a>
            <nav class="nav-bar__links">
                <a href="/" class="nav-bar__link">
                    "Marketplace"
                </a>
                <a href="/my-listings" class="nav-bar__link">
                    "My Listings"
                </a>
                <a href="/purchases" class="nav-bar__link">
                    "Purchases"
                </a>
                <a href="/cart" class="nav-bar__link nav-bar__cart">
                    "Cart"
                    <Show when=has_items>
                        <span class="nav-bar__cart-count">{count}</span>
                    </Show>
                </a>
                <a href="/dashboard" class="nav-bar__link">
                    "Dashboard"
                </a>
            </nav>
            <Show when=authenticated>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
