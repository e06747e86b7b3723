//! Persistent session store backed by localStorage.
//!
//! One fixed key holds the serialized [`UserInfo`] record. Storage and
//! serialization failures are logged and swallowed: losing the session
//! must never crash a page. The in-memory mirror lives in a
//! [`SessionState`] signal provided at the app root; pages call
//! [`refresh`] at the start of their auth check because another tab can
//! rewrite storage between navigations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserInfo;

/// The single localStorage key for the session record.
pub const STORAGE_KEY: &str = "ecofinds_user";

/// In-memory mirror of the stored session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl SessionState {
    /// True iff a record exists with a present, non-zero id.
    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    /// The logged-in user's id, or `None` when unauthenticated.
    pub fn user_id(&self) -> Option<i64> {
        self.user
            .as_ref()
            .and_then(|u| u.id)
            .filter(|id| *id != 0)
    }
}

/// Parse a raw stored record. Returns `None` on malformed JSON.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn parse_stored(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

/// Read and parse the stored session record.
///
/// Returns `None` when nothing is stored, storage is unavailable, or the
/// record fails to parse (logged, never thrown).
pub fn read_stored_user() -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        let parsed = parse_stored(&raw);
        if parsed.is_none() {
            log::error!("failed to parse stored session record");
        }
        parsed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Serialize and write the session record. No-ops on storage failure.
pub fn write_stored_user(user: &UserInfo) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw) = serde_json::to_string(user) else {
            log::error!("failed to serialize session record");
            return;
        };
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                log::error!("failed to store session record");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the stored session record.
pub fn clear_stored_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Re-read storage into the in-memory mirror and return the fresh record.
pub fn refresh(session: RwSignal<SessionState>) -> Option<UserInfo> {
    let user = read_stored_user();
    session.update(|s| s.user.clone_from(&user));
    user
}

/// Store a new session record and update the mirror. Used on login,
/// registration, and profile save.
pub fn store(session: RwSignal<SessionState>, user: UserInfo) {
    write_stored_user(&user);
    session.update(|s| s.user = Some(user));
}

/// Destroy the session: clear storage and the mirror.
pub fn logout(session: RwSignal<SessionState>) {
    clear_stored_user();
    session.update(|s| s.user = None);
}
