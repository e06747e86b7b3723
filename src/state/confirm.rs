//! Blocking yes/no confirmation dialog state.
//!
//! [`confirm_action`] suspends the calling flow until the user answers.
//! The prompt holds a oneshot responder; the dialog component resolves it
//! with the user's choice. Resolving an already-answered prompt is a
//! no-op, and a dropped responder counts as a cancel.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

#[cfg(feature = "hydrate")]
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

/// The currently open prompt, if any.
#[derive(Clone, Default)]
pub struct ConfirmState {
    pub prompt: Option<ConfirmPrompt>,
}

/// One pending confirmation.
#[derive(Clone)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    #[cfg(feature = "hydrate")]
    responder: Arc<Mutex<Option<futures::channel::oneshot::Sender<bool>>>>,
}

impl ConfirmPrompt {
    /// Answer the prompt. Only the first call delivers; later calls no-op.
    pub fn resolve(&self, choice: bool) {
        #[cfg(feature = "hydrate")]
        {
            let taken = self.responder.lock().ok().and_then(|mut tx| tx.take());
            if let Some(tx) = taken {
                let _ = tx.send(choice);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = choice;
        }
    }
}

/// Present a blocking yes/no prompt and wait for the user's choice.
///
/// Resolves `false` if the dialog is torn down without an answer, and
/// always `false` during SSR where no user can answer.
pub async fn confirm_action(
    confirm: RwSignal<ConfirmState>,
    message: &str,
    title: &str,
) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::oneshot::channel();
        confirm.set(ConfirmState {
            prompt: Some(ConfirmPrompt {
                title: title.to_owned(),
                message: message.to_owned(),
                responder: Arc::new(Mutex::new(Some(tx))),
            }),
        });
        let choice = rx.await.unwrap_or(false);
        confirm.update(|c| c.prompt = None);
        choice
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (confirm, message, title);
        false
    }
}
