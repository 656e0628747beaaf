//! Authentication error types.

use thiserror::Error;

use shopsphere_core::EmailError;

/// Errors from the authentication backend.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was left empty.
    #[error("enter both email and password to continue")]
    MissingCredentials,

    /// The email address is structurally invalid.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The password does not meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),
}

impl AuthError {
    /// The redirect error code the auth pages translate into display copy.
    #[must_use]
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_fields",
            Self::InvalidEmail(_) => "invalid_email",
            Self::WeakPassword(_) => "password_short",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AuthError::MissingCredentials.as_code(), "missing_fields");
        assert_eq!(
            AuthError::WeakPassword("too short".to_string()).as_code(),
            "password_short"
        );
    }
}
