//! Submit button that swaps its label for a spinner while busy.

use leptos::prelude::*;

/// Button disabled while `loading` is set, showing a spinner in place of
/// its label and restoring the label afterwards.
#[component]
pub fn LoadingButton(
    label: &'static str,
    #[prop(into)] loading: Signal<bool>,
    on_press: Callback<()>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let full_class = move || {
        let extra = class.unwrap_or_default();
        if loading.get() {
            format!("btn btn--primary btn--loading {extra}")
        } else {
            format!("btn btn--primary {extra}")
        }
    };

    view! {
        <button
            class=full_class
            disabled=move || loading.get()
            on:click=move |_| on_press.run(())
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="loading-spinner loading-spinner--inline"></span>
                        " Loading..."
                    }
                        .into_any()
                } else {
                    label.into_any()
                }
            }}
        </button>
    }
}
