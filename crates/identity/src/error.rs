//! Classified provider failures.
//!
//! The `Display` text is the user-facing message shown by the client; it is
//! surfaced verbatim, never retried.

use thiserror::Error;

/// Identity provider errors.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("That email address is already in use.")]
    EmailInUse,
    #[error("Incorrect email or password.")]
    InvalidCredentials,
    #[error("No account found for that email address.")]
    UserNotFound,
    #[error("This account has been disabled.")]
    UserDisabled,
    #[error("Password is too weak: {0}")]
    WeakPassword(String),
    #[error("Too many attempts. Please try again later.")]
    TooManyAttempts,
    #[error("Could not reach the sign-in service: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Sign-in service error: {0}")]
    Provider(String),
}

impl IdentityError {
    /// Maps a provider error code to its classified variant.
    ///
    /// Codes may carry a detail suffix (`"WEAK_PASSWORD : Password should
    /// be at least 6 characters"`); unknown codes pass through as
    /// [`IdentityError::Provider`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let (head, detail) = match code.split_once(" : ") {
            Some((head, detail)) => (head.trim(), detail.trim()),
            None => (code.trim(), ""),
        };

        match head {
            "EMAIL_EXISTS" => Self::EmailInUse,
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredentials,
            "EMAIL_NOT_FOUND" => Self::UserNotFound,
            "USER_DISABLED" => Self::UserDisabled,
            "WEAK_PASSWORD" => {
                let detail = if detail.is_empty() {
                    "password rejected by the provider".to_string()
                } else {
                    detail.to_string()
                };
                Self::WeakPassword(detail)
            }
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            other => Self::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_classify() {
        assert!(matches!(
            IdentityError::from_code("EMAIL_EXISTS"),
            IdentityError::EmailInUse
        ));
        assert!(matches!(
            IdentityError::from_code("INVALID_LOGIN_CREDENTIALS"),
            IdentityError::InvalidCredentials
        ));
        assert!(matches!(
            IdentityError::from_code("EMAIL_NOT_FOUND"),
            IdentityError::UserNotFound
        ));
        assert!(matches!(
            IdentityError::from_code("TOO_MANY_ATTEMPTS_TRY_LATER"),
            IdentityError::TooManyAttempts
        ));
    }

    #[test]
    fn weak_password_keeps_the_detail() {
        let err =
            IdentityError::from_code("WEAK_PASSWORD : Password should be at least 6 characters");
        match err {
            IdentityError::WeakPassword(detail) => {
                assert_eq!(detail, "Password should be at least 6 characters");
            }
            other => panic!("expected WeakPassword, got {other:?}"),
        }
    }

    #[test]
    fn unknown_codes_pass_through() {
        match IdentityError::from_code("OPERATION_NOT_ALLOWED") {
            IdentityError::Provider(code) => assert_eq!(code, "OPERATION_NOT_ALLOWED"),
            other => panic!("expected Provider, got {other:?}"),
        }
    }
}
