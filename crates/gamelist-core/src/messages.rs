//! Human-readable messages for failed calls.

use crate::error::{AuthError, Error};

/// Turn an error into a message fit for display.
///
/// A message supplied by the server wins; otherwise well-known status codes
/// get a fixed text and everything else gets `fallback`. Never fails.
pub fn user_message(error: &Error, fallback: &str) -> String {
    match error {
        Error::Protocol(e) => {
            if let Some(message) = e.message.as_deref().filter(|m| !m.trim().is_empty()) {
                return message.to_string();
            }
            status_message(e.status).unwrap_or(fallback).to_string()
        }
        Error::Auth(AuthError::RefreshFailed { .. } | AuthError::NotAuthenticated) => {
            status_message(401).unwrap_or(fallback).to_string()
        }
        Error::Validation(e) => e.to_string(),
        Error::Transport(_) | Error::InvalidInput(_) => fallback.to_string(),
    }
}

fn status_message(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Please log in"),
        403 => Some("You do not have access to this resource"),
        404 => Some("Resource not found"),
        500 => Some("Internal server error"),
        _ => None,
    }
}
