use super::*;

#[test]
fn default_overlay_is_hidden() {
    assert!(!LoadingState::default().is_visible());
}

#[test]
fn begin_shows_and_end_hides() {
    let mut state = LoadingState::default();
    state.begin();
    assert!(state.is_visible());
    state.end();
    assert!(!state.is_visible());
}

#[test]
fn overlapping_loads_keep_overlay_visible() {
    let mut state = LoadingState::default();
    state.begin();
    state.begin();
    state.end();
    // One load is still in flight.
    assert!(state.is_visible());
    state.end();
    assert!(!state.is_visible());
}

#[test]
fn unbalanced_end_saturates_at_zero() {
    let mut state = LoadingState::default();
    state.end();
    state.end();
    assert!(!state.is_visible());
    state.begin();
    assert!(state.is_visible());
}
