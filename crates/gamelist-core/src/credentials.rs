//! Login credentials type.

use std::fmt;

use crate::validation::FormValidator;
use crate::Result;

/// Username and password for the `/auth/login` and `/auth/register` calls.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use gamelist_core::Credentials;
///
/// let creds = Credentials::new("alice", "hunter22");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check the username and password against the registration rules.
    pub fn validate(&self) -> Result<()> {
        FormValidator::validate_username(&self.username)?;
        FormValidator::validate_password(&self.password)?;
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
