//! Toast queue state machine.
//!
//! Each message walks `Created -> Visible -> FadingOut -> removed`, no
//! state skipped. The short entry delay lets the enter animation run; the
//! fade window matches the exit animation. Concurrent toasts stack with
//! no deduplication. The transitions themselves are pure; only the timers
//! that drive them need a browser.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// Delay before a new toast becomes visible.
pub const SHOW_DELAY_MS: u32 = 100;
/// Fade-out window before removal.
pub const FADE_OUT_MS: u32 = 300;
/// Default time a toast stays visible.
pub const DEFAULT_DURATION_MS: u32 = 5000;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

/// Lifecycle phase of a toast still in the queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Created,
    Visible,
    FadingOut,
}

/// One transient notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

/// The stacked toast queue.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Enqueue a new toast in the `Created` phase; returns its id.
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            text: text.into(),
            kind,
            phase: ToastPhase::Created,
        });
        id
    }

    /// `Created -> Visible`. Other phases are left untouched.
    pub fn mark_visible(&mut self, id: u64) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Created {
                toast.phase = ToastPhase::Visible;
            }
        }
    }

    /// `Visible -> FadingOut`. Other phases are left untouched.
    pub fn begin_fade(&mut self, id: u64) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Visible {
                toast.phase = ToastPhase::FadingOut;
            }
        }
    }

    /// Drop a toast from the queue. Idempotent: removing an id that is
    /// already gone is a no-op.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}

/// Show a toast for the default five seconds.
pub fn show_message(toasts: RwSignal<ToastsState>, text: impl Into<String>, kind: ToastKind) {
    show_message_for(toasts, text, kind, DEFAULT_DURATION_MS);
}

/// Show a toast for `duration_ms`, then fade and remove it.
///
/// The timers only run in the browser; during SSR the toast stays in the
/// `Created` phase and is never rendered as visible.
pub fn show_message_for(
    toasts: RwSignal<ToastsState>,
    text: impl Into<String>,
    kind: ToastKind,
    duration_ms: u32,
) {
    let id = {
        let mut id = 0;
        toasts.update(|t| id = t.push(text, kind));
        id
    };

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::future::TimeoutFuture;

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SHOW_DELAY_MS).await;
            toasts.update(|t| t.mark_visible(id));
            TimeoutFuture::new(duration_ms).await;
            toasts.update(|t| t.begin_fade(id));
            TimeoutFuture::new(FADE_OUT_MS).await;
            toasts.update(|t| t.remove(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, duration_ms);
    }
}
