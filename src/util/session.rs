//! Session store: the signed-in user's record cached in `localStorage`.
//!
//! One key holds the JSON-encoded identity. There is no token or expiry;
//! a session exists exactly as long as the key does. Absent or unparsable
//! data reads as "no session"; `load` never fails. Requires a browser
//! environment; outside it (SSR, tests) the store is always empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "blogscope_user";

/// Decode a stored session payload. Corrupt data yields `None`.
pub fn decode(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Encode an identity for storage.
pub fn encode(user: &User) -> String {
    serde_json::to_string(user).unwrap_or_default()
}

/// Read the persisted identity, if any.
pub fn load() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Overwrite the persisted identity unconditionally.
pub fn save(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, &encode(user));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the persisted identity. A no-op when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
