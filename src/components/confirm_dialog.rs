//! Modal yes/no dialog backing `confirm_action`.

use leptos::prelude::*;

use crate::state::confirm::ConfirmState;

/// Renders the pending confirmation prompt, if any. Clicking the
/// backdrop or Cancel answers no; Confirm answers yes.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = expect_context::<RwSignal<ConfirmState>>();

    view! {
        {move || {
            confirm
                .get()
                .prompt
                .map(|prompt| {
                    let title = prompt.title.clone();
                    let message = prompt.message.clone();
                    let on_backdrop = prompt.clone();
                    let on_cancel = prompt.clone();
                    let on_confirm = prompt;
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| on_backdrop.resolve(false)>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2>{title}</h2>
                                <p class="dialog__message">{message}</p>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| on_cancel.resolve(false)>
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| on_confirm.resolve(true)
                                    >
                                        "Confirm"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
