//! Session state and the gateway that owns it.
//!
//! All session changes flow through one `mpsc` channel into a single
//! dispatcher task, which swaps whole [`AuthSession`] snapshots into a
//! `watch` channel. The authenticated flag and the user identity therefore
//! always change together, no matter which code path triggered the change
//! (our own calls, a sign-out on another device, token expiry).

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};

use crate::{AuthUser, IdentityProvider, ResultIdentity};

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// The identity carried by an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&AuthUser> for SessionUser {
    fn from(user: &AuthUser) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.clone(),
            expires_at: user.expires_at,
        }
    }
}

/// Snapshot of the session as observed by every screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub last_error: Option<String>,
}

/// A session change to be applied by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(SessionUser),
    SignedOut,
    /// A terminal operation failure; recorded without touching the
    /// authenticated state.
    Failed(String),
}

/// The identity gateway handed to the app at startup.
///
/// There is no globally reachable instance; whoever needs session state
/// receives a clone of this handle or a [`watch::Receiver`] from
/// [`subscribe`](IdentityGateway::subscribe).
#[derive(Debug, Clone)]
pub struct IdentityGateway<P> {
    provider: P,
    events: mpsc::Sender<SessionEvent>,
    session: watch::Receiver<AuthSession>,
}

impl<P: IdentityProvider> IdentityGateway<P> {
    /// Builds the gateway and spawns its dispatcher task. Must be called
    /// from within a tokio runtime.
    #[must_use]
    pub fn new(provider: P) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (session_tx, session_rx) = watch::channel(AuthSession::default());
        tokio::spawn(dispatch(event_rx, session_tx));
        Self {
            provider,
            events: event_tx,
            session: session_rx,
        }
    }

    /// Watch handle over the session snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthSession> {
        self.session.clone()
    }

    /// Current snapshot.
    #[must_use]
    pub fn session(&self) -> AuthSession {
        self.session.borrow().clone()
    }

    /// Creates an account; on success the session becomes authenticated.
    pub async fn sign_up(&self, email: &str, password: &str) -> ResultIdentity<SessionUser> {
        let result = self.provider.sign_up(email, password).await;
        self.apply_credential_result(result).await
    }

    /// Signs in; on success the session becomes authenticated.
    pub async fn sign_in(&self, email: &str, password: &str) -> ResultIdentity<SessionUser> {
        let result = self.provider.sign_in(email, password).await;
        self.apply_credential_result(result).await
    }

    /// Discards the local session. The wire service has no revoke call for
    /// password sessions, so this is purely a local state change.
    pub async fn sign_out(&self) {
        self.emit(SessionEvent::SignedOut).await;
    }

    /// Asks the provider to send a reset email. No session change.
    pub async fn request_password_reset(&self, email: &str) -> ResultIdentity<()> {
        self.provider.send_password_reset(email).await
    }

    /// Mirrors an externally observed session change (another device signed
    /// out, the token expired) through the same dispatcher as our own calls.
    pub async fn emit(&self, event: SessionEvent) {
        if self.events.send(event).await.is_err() {
            tracing::warn!("session dispatcher is gone; event dropped");
        }
    }

    async fn apply_credential_result(
        &self,
        result: ResultIdentity<AuthUser>,
    ) -> ResultIdentity<SessionUser> {
        match result {
            Ok(user) => {
                let session_user = SessionUser::from(&user);
                self.emit(SessionEvent::SignedIn(session_user.clone())).await;
                Ok(session_user)
            }
            Err(err) => {
                self.emit(SessionEvent::Failed(err.to_string())).await;
                Err(err)
            }
        }
    }
}

/// The single writer of session state.
async fn dispatch(
    mut events: mpsc::Receiver<SessionEvent>,
    session: watch::Sender<AuthSession>,
) {
    while let Some(event) = events.recv().await {
        let next = match event {
            SessionEvent::SignedIn(user) => {
                tracing::info!(email = %user.email, "session signed in");
                AuthSession {
                    authenticated: true,
                    user: Some(user),
                    last_error: None,
                }
            }
            SessionEvent::SignedOut => {
                tracing::info!("session signed out");
                AuthSession::default()
            }
            SessionEvent::Failed(message) => {
                tracing::warn!(%message, "identity operation failed");
                let mut current = session.borrow().clone();
                current.last_error = Some(message);
                current
            }
        };
        if session.send(next).is_err() {
            break;
        }
    }
}
