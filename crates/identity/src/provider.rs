//! The provider boundary: the credential operations against an external
//! managed identity service.

use chrono::{DateTime, Utc};

use crate::ResultIdentity;

/// The identity returned by a successful credential operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    /// When the session token lapses; callers emit a sign-out once it does.
    pub expires_at: DateTime<Utc>,
}

/// The external identity service. One implementation talks HTTP
/// ([`RestProvider`](crate::RestProvider)); tests substitute their own.
///
/// Sign-out is absent on purpose: password sessions have no revoke call,
/// the client discards its token locally.
pub trait IdentityProvider {
    /// Creates an account and signs it in.
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = ResultIdentity<AuthUser>> + Send;

    /// Signs an existing account in.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = ResultIdentity<AuthUser>> + Send;

    /// Asks the service to send a password-reset email.
    fn send_password_reset(&self, email: &str) -> impl Future<Output = ResultIdentity<()>> + Send;
}
