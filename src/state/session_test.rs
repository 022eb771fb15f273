use super::*;
use crate::net::error::ApiError;
use crate::net::types::{LoginResponse, User};

fn user() -> User {
    User {
        id: 7,
        username: "asha".to_owned(),
        email: "asha@example.com".to_owned(),
        name: Some("Asha".to_owned()),
    }
}

fn login_response() -> LoginResponse {
    LoginResponse {
        access_token: "tok-123".to_owned(),
        token_type: "Bearer".to_owned(),
        user: user(),
    }
}

// =============================================================
// Defaults and transitions
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn establish_stores_token_and_user() {
    let mut state = SessionState::default();
    state.establish(login_response());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-123"));
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(7));
    assert!(!state.loading);
}

#[test]
fn clear_returns_to_anonymous() {
    let mut state = SessionState::default();
    state.establish(login_response());
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.establish(login_response());
    state.clear();
    state.clear();
    assert!(!state.is_authenticated());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_name_over_username() {
    let mut state = SessionState::default();
    state.establish(login_response());
    assert_eq!(state.display_name().as_deref(), Some("Asha"));
}

#[test]
fn display_name_falls_back_to_username() {
    let mut state = SessionState::default();
    let mut resp = login_response();
    resp.user.name = None;
    state.establish(resp);
    assert_eq!(state.display_name().as_deref(), Some("asha"));
}

#[test]
fn display_name_absent_when_anonymous() {
    assert!(SessionState::default().display_name().is_none());
}

// =============================================================
// 401-driven teardown through the shared signal
// =============================================================

#[test]
fn auth_failure_from_category_fetch_expires_session() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.establish(login_response()));

    let err = ApiError::from_status(401, None, "Failed to load categories");
    assert!(err.is_auth());
    expire_session(session);

    assert!(session.with_untracked(|s| !s.is_authenticated()));
    assert!(session.with_untracked(|s| s.user.is_none()));
}

#[test]
fn expire_session_is_idempotent() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.establish(login_response()));
    expire_session(session);
    expire_session(session);
    assert!(session.with_untracked(|s| !s.is_authenticated()));
}

// =============================================================
// Restore outside the browser
// =============================================================

#[test]
fn restore_without_storage_is_anonymous() {
    let state = SessionState::restore();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
