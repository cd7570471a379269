//! Error types for the gamelist client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, protocol, validation and input errors.
//!
//! Every variant is `Clone`: a single refresh outcome is shared by all
//! requests waiting on it, and each of them gets its own copy.

use std::fmt;
use thiserror::Error;

/// The unified error type for gamelist operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors that ended the session.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-success HTTP responses.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (base URL, path segments).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Form validation errors for usernames and passwords.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns the HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Protocol(e) => Some(e.status),
            Error::Auth(AuthError::RefreshFailed { source }) => source.status(),
            _ => None,
        }
    }

    /// True if the server rejected the presented credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Protocol(e) if e.is_auth_error())
    }

    /// True if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Timeout { .. }))
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The credential refresh failed; the session has been cleared.
    #[error("session refresh failed: {source}")]
    RefreshFailed {
        #[source]
        source: Box<Error>,
    },

    /// An operation needed a logged-in session and there was none.
    #[error("not logged in")]
    NotAuthenticated,
}

impl AuthError {
    /// Wrap the failure of a refresh call.
    pub fn refresh_failed(source: Error) -> Self {
        AuthError::RefreshFailed {
            source: Box::new(source),
        }
    }
}

/// A non-success HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if the body carried one.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Clone, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid path segment (empty identifier).
    #[error("invalid {field}: must not be empty")]
    EmptySegment { field: &'static str },

    /// Request body could not be encoded as JSON.
    #[error("invalid request body: {message}")]
    Body { message: String },
}

/// Login and registration form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "username must be at least 5 characters and contain only letters, digits, '.', '_' or '-'"
    )]
    Username,

    #[error("password must be at least 6 characters")]
    Password,

    #[error("passwords do not match")]
    PasswordMismatch,
}
