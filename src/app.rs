//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    auth::AuthPage, cart::CartPage, dashboard::DashboardPage, marketplace::MarketplacePage,
    my_listings::MyListingsPage, new_listing::NewListingPage,
    product_detail::ProductDetailPage, purchases::PurchasesPage,
};
use crate::state::cart::CartBadge;
use crate::state::confirm::ConfirmState;
use crate::state::loading::LoadingState;
use crate::state::session::SessionState;
use crate::state::toasts::ToastsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastsState::default());
    let loading = RwSignal::new(LoadingState::default());
    let confirm = RwSignal::new(ConfirmState::default());
    let badge = RwSignal::new(CartBadge::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(loading);
    provide_context(confirm);
    provide_context(badge);

    view! {
        <Stylesheet id="leptos" href="/pkg/ecofinds.css"/>
        <Title text="EcoFinds"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("") view=MarketplacePage/>
                <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("purchases") view=PurchasesPage/>
                <Route path=StaticSegment("my-listings") view=MyListingsPage/>
                <Route path=StaticSegment("sell") view=NewListingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>

        <ToastHost/>
        <LoadingOverlay/>
        <ConfirmDialog/>
    }
}
