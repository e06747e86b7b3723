//! Fixed-position container rendering the stacked toast queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastPhase, ToastsState};

/// Renders every queued toast. Visibility is class-driven so the CSS
/// enter/exit transitions line up with the state machine phases.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let shown = match toast.phase {
                            ToastPhase::Visible => "toast--show",
                            ToastPhase::Created | ToastPhase::FadingOut => "",
                        };
                        let class = format!("toast {} {shown}", toast.kind.css_class());
                        let text = toast.text.clone();
                        view! { <div class=class>{text}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
