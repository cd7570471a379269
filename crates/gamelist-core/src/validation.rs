//! Login and registration form checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

const MIN_USERNAME_LEN: usize = 5;
const MIN_PASSWORD_LEN: usize = 6;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("username pattern is valid")
});

/// Validators applied before credentials are sent to the service.
pub struct FormValidator;

impl FormValidator {
    /// A username has at least five characters, starts with a letter or digit,
    /// and otherwise uses only letters, digits, `.`, `_` and `-`.
    pub fn validate_username(username: &str) -> Result<(), ValidationError> {
        if username.chars().count() < MIN_USERNAME_LEN || !USERNAME_RE.is_match(username) {
            return Err(ValidationError::Username);
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::Password);
        }
        Ok(())
    }

    pub fn validate_password_match(
        password: &str,
        confirmation: &str,
    ) -> Result<(), ValidationError> {
        if password != confirmation {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}
