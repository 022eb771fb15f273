use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_is_auth() {
    let err = ApiError::from_status(401, None, "Failed to load user");
    assert_eq!(err.kind, ErrorKind::Auth);
    assert!(err.is_auth());
    assert_eq!(err.status, Some(401));
}

#[test]
fn other_4xx_are_validation() {
    for status in [400, 404, 409, 422] {
        let err = ApiError::from_status(status, None, "nope");
        assert_eq!(err.kind, ErrorKind::Validation, "status {status}");
        assert!(!err.is_auth());
    }
}

#[test]
fn five_xx_are_server() {
    let err = ApiError::from_status(500, None, "nope");
    assert_eq!(err.kind, ErrorKind::Server);
    let err = ApiError::from_status(503, None, "nope");
    assert_eq!(err.kind, ErrorKind::Server);
}

#[test]
fn network_failure_has_no_status() {
    let err = ApiError::network("Failed to load expenses");
    assert_eq!(err.kind, ErrorKind::Network);
    assert_eq!(err.status, None);
}

// =============================================================
// Message fallback
// =============================================================

#[test]
fn server_message_wins_when_present() {
    let err = ApiError::from_status(
        400,
        Some("Category name already exists".to_owned()),
        "Failed to save category",
    );
    assert_eq!(err.message, "Category name already exists");
}

#[test]
fn blank_server_message_falls_back() {
    let err = ApiError::from_status(400, Some("   ".to_owned()), "Failed to save category");
    assert_eq!(err.message, "Failed to save category");
}

#[test]
fn missing_server_message_falls_back() {
    let err = ApiError::from_status(500, None, "Failed to delete expense");
    assert_eq!(err.message, "Failed to delete expense");
}

#[test]
fn display_shows_the_message() {
    let err = ApiError::network("Failed to load categories");
    assert_eq!(err.to_string(), "Failed to load categories");
}

#[test]
fn non_auth_profile_failure_is_displayable() {
    let err = ApiError::from_status(500, None, "Failed to load user");
    assert!(!err.is_auth());
    assert_eq!(err.to_string(), "Failed to load user");
}
