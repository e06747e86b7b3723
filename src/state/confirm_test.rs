use super::*;

#[test]
fn default_state_has_no_prompt() {
    let state = ConfirmState::default();
    assert!(state.prompt.is_none());
}

// The responder channel needs a browser event loop; off-browser the
// prompt is inert and resolving it must be safe to call repeatedly.
#[test]
fn resolving_without_responder_is_safe() {
    let prompt = ConfirmPrompt {
        title: "Clear Cart".to_owned(),
        message: "Are you sure you want to clear your cart?".to_owned(),
    };
    prompt.resolve(true);
    prompt.resolve(false);
}
