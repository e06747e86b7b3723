//! Reference-counted blocking loading overlay.
//!
//! A plain boolean flag here loses track when two loads overlap: the
//! first `hide` blanks the overlay while the second load is still in
//! flight. The count pairs every `begin` with an `end`, so the overlay
//! stays up until the last in-flight operation finishes.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

/// Count of in-flight operations holding the overlay open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    active: u32,
}

impl LoadingState {
    pub fn begin(&mut self) {
        self.active += 1;
    }

    /// Release one hold. Unbalanced `end` calls saturate at zero.
    pub fn end(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn is_visible(self) -> bool {
        self.active > 0
    }
}

/// Take a hold on the overlay for the duration of an operation.
pub fn begin_loading(loading: RwSignal<LoadingState>) {
    loading.update(LoadingState::begin);
}

/// Release a hold taken with [`begin_loading`].
pub fn end_loading(loading: RwSignal<LoadingState>) {
    loading.update(LoadingState::end);
}
