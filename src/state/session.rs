//! Authenticated session state and its two transitions.
//!
//! The session is either authenticated (token present) or anonymous.
//! It becomes authenticated on login and anonymous on logout or on any
//! 401 response; the teardown is idempotent so overlapping 401s from
//! in-flight requests cannot loop or double-redirect.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::types::{LoginResponse, User};
use crate::util::storage;

/// The session context provided to every page via `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True while the persisted session is being revalidated against
    /// `/users/me`.
    pub loading: bool,
}

impl SessionState {
    /// Rebuild the session from persistent storage. Anonymous on the
    /// server or when nothing is stored.
    pub fn restore() -> Self {
        let token = storage::read_token();
        let user = storage::read_user();
        let loading = token.is_some();
        Self { token, user, loading }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Transition to authenticated.
    pub fn establish(&mut self, resp: LoginResponse) {
        self.token = Some(resp.access_token);
        self.user = Some(resp.user);
        self.loading = false;
    }

    /// Transition to anonymous. Idempotent.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Display name for the welcome header: the optional display name,
    /// falling back to the username.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        Some(user.name.clone().unwrap_or_else(|| user.username.clone()))
    }
}

/// Establish the shared session after a successful login and persist it.
pub fn establish_session(session: RwSignal<SessionState>, resp: LoginResponse) {
    storage::store_session(&resp.access_token, &resp.user);
    session.update(|s| s.establish(resp));
}

/// Tear the session down after a logout or a 401. Clears both the
/// signal and persistent storage; a no-op when already anonymous, so
/// repeated 401s collapse into a single transition.
pub fn expire_session(session: RwSignal<SessionState>) {
    if session.with_untracked(|s| !s.is_authenticated() && !s.loading) {
        return;
    }
    storage::clear_session();
    session.update(SessionState::clear);
}
