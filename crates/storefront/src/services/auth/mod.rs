//! Authentication service.
//!
//! The demo storefront has no real authentication backend. [`SimulatedAuth`]
//! validates input, waits a configurable latency in place of a network round
//! trip, and then succeeds. The [`AuthBackend`] trait is the seam where a
//! real customer-account integration would slot in; callers only see
//! explicit success/failure outcomes, never a timer illusion.

mod error;

pub use error::AuthError;

use std::time::Duration;

use shopsphere_core::Email;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A successfully authenticated (or registered) user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: Email,
}

/// Capability interface for authentication backends.
pub trait AuthBackend {
    /// Authenticate with email and password.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthenticatedUser, AuthError>> + Send;

    /// Register a new account with email and password.
    fn signup(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthenticatedUser, AuthError>> + Send;
}

/// Simulated authentication backend.
///
/// Accepts any structurally valid credentials after an artificial delay.
/// Stores nothing.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    /// Create a backend with the given artificial latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AuthBackend for SimulatedAuth {
    async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let email = Email::parse(email)?;

        tokio::time::sleep(self.delay).await;

        Ok(AuthenticatedUser { email })
    }

    async fn signup(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        tokio::time::sleep(self.delay).await;

        Ok(AuthenticatedUser { email })
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn instant_auth() -> SimulatedAuth {
        SimulatedAuth::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_succeeds_for_valid_input() {
        let auth = instant_auth();
        let user = auth.login("user@example.com", "hunter2!").await.unwrap();
        assert_eq!(user.email.as_str(), "user@example.com");
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields() {
        let auth = instant_auth();
        assert!(matches!(
            auth.login("", "password").await,
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            auth.login("user@example.com", "").await,
            Err(AuthError::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let auth = instant_auth();
        assert!(matches!(
            auth.login("not-an-email", "password").await,
            Err(AuthError::InvalidEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_signup_enforces_password_length() {
        let auth = instant_auth();
        assert!(matches!(
            auth.signup("user@example.com", "short").await,
            Err(AuthError::WeakPassword(_))
        ));
        assert!(auth.signup("user@example.com", "longenough").await.is_ok());
    }

    #[tokio::test]
    async fn test_simulated_delay_elapses() {
        let auth = SimulatedAuth::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        auth.login("user@example.com", "password123").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
