//! Normalized API error type.
//!
//! The backend reports failures as `{ "message": "..." }` bodies with a
//! meaningful status code. Every call in `net::api` folds whatever it
//! got back (or the absence of a response) into an [`ApiError`] so the
//! forms and lists all consume one shape.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure classification, driven by the HTTP status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response arrived (or the body could not be decoded).
    Network,
    /// A 4xx other than 401: the request was understood and rejected.
    Validation,
    /// 401: the session is no longer valid. The only kind with a side
    /// effect beyond display (session teardown + redirect).
    Auth,
    /// A 5xx from the server.
    Server,
}

/// A normalized request failure: classification, the status code when
/// one exists, and a message that is always safe to show the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// A failure with no HTTP response: connection refused, timeout,
    /// or an undecodable body.
    pub fn network(fallback: &str) -> Self {
        Self {
            kind: ErrorKind::Network,
            status: None,
            message: fallback.to_owned(),
        }
    }

    /// Classify a non-2xx response. The server-provided message wins
    /// when present and non-blank; otherwise the caller's per-operation
    /// fallback is used.
    pub fn from_status(status: u16, server_message: Option<String>, fallback: &str) -> Self {
        let kind = match status {
            401 => ErrorKind::Auth,
            400..=499 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Network,
        };
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        Self {
            kind,
            status: Some(status),
            message,
        }
    }

    /// Whether this failure must tear down the session.
    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }
}
