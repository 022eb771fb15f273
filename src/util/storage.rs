//! Session persistence in `localStorage`.
//!
//! The token and cached user live under fixed keys so a page reload
//! stays signed in. Both are removed together on logout or when any
//! request comes back 401. Requires a browser environment; on the
//! server every read returns `None` and writes are no-ops.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "spendbook.token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "spendbook.user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the cached user summary, if any.
pub fn read_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token and user summary after a successful login.
pub fn store_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Refresh only the cached user summary (after `/users/me`).
pub fn store_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove both keys. Safe to call when nothing is stored.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
