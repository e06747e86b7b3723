use super::*;

// =============================================================
// Queue basics
// =============================================================

#[test]
fn push_starts_in_created_phase() {
    let mut state = ToastsState::default();
    let id = state.push("Saved", ToastKind::Success);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, id);
    assert_eq!(state.toasts()[0].phase, ToastPhase::Created);
}

#[test]
fn concurrent_toasts_stack_without_dedup() {
    let mut state = ToastsState::default();
    let a = state.push("Saved", ToastKind::Success);
    let b = state.push("Saved", ToastKind::Success);
    assert_ne!(a, b);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut state = ToastsState::default();
    let a = state.push("one", ToastKind::Info);
    state.remove(a);
    let b = state.push("two", ToastKind::Info);
    assert_ne!(a, b);
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn full_lifecycle_walks_every_phase() {
    let mut state = ToastsState::default();
    let id = state.push("Item removed from cart", ToastKind::Success);

    state.mark_visible(id);
    assert_eq!(state.toasts()[0].phase, ToastPhase::Visible);

    state.begin_fade(id);
    assert_eq!(state.toasts()[0].phase, ToastPhase::FadingOut);

    state.remove(id);
    assert!(state.toasts().is_empty());
}

#[test]
fn fade_cannot_skip_visible() {
    let mut state = ToastsState::default();
    let id = state.push("msg", ToastKind::Warning);
    state.begin_fade(id);
    assert_eq!(state.toasts()[0].phase, ToastPhase::Created);
}

#[test]
fn mark_visible_does_not_regress_fading_toast() {
    let mut state = ToastsState::default();
    let id = state.push("msg", ToastKind::Error);
    state.mark_visible(id);
    state.begin_fade(id);
    state.mark_visible(id);
    assert_eq!(state.toasts()[0].phase, ToastPhase::FadingOut);
}

#[test]
fn remove_is_idempotent() {
    let mut state = ToastsState::default();
    let id = state.push("msg", ToastKind::Info);
    state.remove(id);
    state.remove(id);
    assert!(state.toasts().is_empty());
}

#[test]
fn transitions_on_unknown_id_are_no_ops() {
    let mut state = ToastsState::default();
    let id = state.push("msg", ToastKind::Info);
    state.mark_visible(999);
    state.begin_fade(999);
    assert_eq!(state.toasts()[0].phase, ToastPhase::Created);
    let _ = id;
}

#[test]
fn transitions_only_touch_the_target_toast() {
    let mut state = ToastsState::default();
    let a = state.push("a", ToastKind::Info);
    let b = state.push("b", ToastKind::Info);
    state.mark_visible(a);
    assert_eq!(state.toasts()[0].phase, ToastPhase::Visible);
    assert_eq!(state.toasts()[1].phase, ToastPhase::Created);
    let _ = b;
}

// =============================================================
// Kinds and timing constants
// =============================================================

#[test]
fn kind_css_classes_are_distinct() {
    let classes = [
        ToastKind::Success.css_class(),
        ToastKind::Error.css_class(),
        ToastKind::Warning.css_class(),
        ToastKind::Info.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn timing_constants_match_contract() {
    assert_eq!(SHOW_DELAY_MS, 100);
    assert_eq!(FADE_OUT_MS, 300);
    assert_eq!(DEFAULT_DURATION_MS, 5000);
}
