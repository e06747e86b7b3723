use super::*;

fn user(id: Option<i64>) -> UserInfo {
    UserInfo {
        id,
        display_name: Some("Ana".to_owned()),
        email: Some("a@b.com".to_owned()),
        profile_image_url: None,
    }
}

// =============================================================
// Authentication predicate
// =============================================================

#[test]
fn no_record_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user_id().is_none());
}

#[test]
fn record_without_id_is_unauthenticated() {
    let state = SessionState {
        user: Some(user(None)),
        loading: false,
    };
    assert!(!state.is_authenticated());
    assert!(state.user_id().is_none());
}

#[test]
fn zero_id_is_unauthenticated() {
    let state = SessionState {
        user: Some(user(Some(0))),
        loading: false,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn present_id_is_authenticated() {
    let state = SessionState {
        user: Some(user(Some(7))),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.user_id(), Some(7));
}

// =============================================================
// Stored record parsing
// =============================================================

#[test]
fn parse_stored_reads_full_record() {
    let parsed = parse_stored(r#"{"id":7,"displayName":"Ana","email":"a@b.com"}"#).unwrap();
    assert_eq!(parsed.id, Some(7));
    assert_eq!(parsed.display_name.as_deref(), Some("Ana"));
}

#[test]
fn parse_stored_tolerates_empty_object() {
    let parsed = parse_stored("{}").unwrap();
    assert!(parsed.id.is_none());
}

#[test]
fn parse_stored_rejects_malformed_json() {
    assert!(parse_stored("not json").is_none());
    assert!(parse_stored("").is_none());
    assert!(parse_stored(r#"{"id":"#).is_none());
}

#[test]
fn parse_stored_null_id_stays_unauthenticated() {
    let parsed = parse_stored(r#"{"id":null,"displayName":"Ana"}"#).unwrap();
    let state = SessionState {
        user: Some(parsed),
        loading: false,
    };
    assert!(!state.is_authenticated());
}

// =============================================================
// Mirror lifecycle (storage-free equivalents of store/refresh/clear)
// =============================================================

#[test]
fn stored_record_round_trips_through_serialization() {
    let original = user(Some(7));
    let raw = serde_json::to_string(&original).unwrap();
    let restored = parse_stored(&raw).unwrap();
    assert_eq!(restored, original);

    let state = SessionState {
        user: Some(restored),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.user_id(), Some(7));
}

#[test]
fn clearing_mirror_drops_authentication() {
    let mut state = SessionState {
        user: Some(user(Some(7))),
        loading: false,
    };
    assert!(state.is_authenticated());
    state.user = None;
    assert!(!state.is_authenticated());
    assert!(state.user_id().is_none());
}
