//! Browser localStorage persistence for the session credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only read/write glue so session code never touches
//! web-sys directly. Keys are fixed so a reload (or another tab) finds the
//! same session. All functions no-op safely outside the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;

/// localStorage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "usuario";

/// Read the persisted bearer token, if any.
pub fn load_token() -> Option<String> {
    load_string(TOKEN_KEY)
}

/// Read the persisted user profile, if present and parseable.
pub fn load_user() -> Option<User> {
    load_json(USER_KEY)
}

/// Persist both halves of a session.
pub fn persist_session(token: &str, user: &User) {
    save_string(TOKEN_KEY, token);
    save_json(USER_KEY, user);
}

/// Erase the persisted session.
pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from localStorage for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to localStorage for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}
