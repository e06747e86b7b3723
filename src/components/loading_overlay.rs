//! Full-page blocking overlay shown while any counted load is in flight.

use leptos::prelude::*;

use crate::state::loading::LoadingState;

/// Overlay with a centered spinner; visible while the loading count is
/// above zero.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.get().is_visible()>
            <div class="loading-overlay">
                <div class="loading-spinner"></div>
            </div>
        </Show>
    }
}
