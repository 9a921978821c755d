//! Shared-password gate for the simple feature set.

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::domain::foundation::AuthError;

/// Checks a submitted password against the configured shared secret.
pub struct SharedPasswordGate {
    password: Secret<String>,
}

impl SharedPasswordGate {
    pub fn new(password: Secret<String>) -> Self {
        Self { password }
    }

    /// Constant-time comparison of the submitted password.
    pub fn check(&self, submitted: &str) -> Result<(), AuthError> {
        let expected = self.password.expose_secret().as_bytes();
        if bool::from(expected.ct_eq(submitted.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl std::fmt::Debug for SharedPasswordGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedPasswordGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SharedPasswordGate {
        SharedPasswordGate::new(Secret::new("open sesame".to_string()))
    }

    #[test]
    fn accepts_exact_password() {
        assert!(gate().check("open sesame").is_ok());
    }

    #[test]
    fn rejects_wrong_or_partial_password() {
        assert_eq!(gate().check("open"), Err(AuthError::InvalidCredentials));
        assert_eq!(gate().check(""), Err(AuthError::InvalidCredentials));
        assert_eq!(
            gate().check("open sesame!"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn debug_hides_secret() {
        assert!(!format!("{:?}", gate()).contains("sesame"));
    }
}
