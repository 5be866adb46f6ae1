//! Gateway behavior against a scripted provider.

use chrono::{Duration, Utc};

use identity::{
    AuthSession, AuthUser, IdentityError, IdentityGateway, IdentityProvider, SessionEvent,
};

/// Provider that answers from a fixed script instead of the network.
struct ScriptedProvider {
    accept_password: &'static str,
    email_in_use: bool,
}

impl ScriptedProvider {
    fn user(email: &str) -> AuthUser {
        AuthUser {
            uid: format!("uid-{email}"),
            email: email.to_string(),
            id_token: "token".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }
}

impl IdentityProvider for ScriptedProvider {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthUser, IdentityError> {
        if self.email_in_use {
            return Err(IdentityError::EmailInUse);
        }
        Ok(Self::user(email))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, IdentityError> {
        if password != self.accept_password {
            return Err(IdentityError::InvalidCredentials);
        }
        Ok(Self::user(email))
    }

    async fn send_password_reset(&self, _email: &str) -> Result<(), IdentityError> {
        Ok(())
    }
}

fn gateway(email_in_use: bool) -> IdentityGateway<ScriptedProvider> {
    IdentityGateway::new(ScriptedProvider {
        accept_password: "hunter2",
        email_in_use,
    })
}

#[tokio::test]
async fn sign_in_flips_flag_and_identity_together() {
    let gateway = gateway(false);
    let mut session = gateway.subscribe();
    assert_eq!(*session.borrow(), AuthSession::default());

    let user = gateway.sign_in("kari@example.com", "hunter2").await.unwrap();
    assert_eq!(user.email, "kari@example.com");

    session.changed().await.unwrap();
    let snapshot = session.borrow_and_update().clone();
    assert!(snapshot.authenticated);
    assert_eq!(
        snapshot.user.as_ref().map(|u| u.email.as_str()),
        Some("kari@example.com")
    );
    assert_eq!(snapshot.last_error, None);
}

#[tokio::test]
async fn failed_sign_in_records_error_and_stays_unauthenticated() {
    let gateway = gateway(false);
    let mut session = gateway.subscribe();

    let err = gateway
        .sign_in("kari@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::InvalidCredentials));

    session.changed().await.unwrap();
    let snapshot = session.borrow_and_update().clone();
    assert!(!snapshot.authenticated);
    assert_eq!(snapshot.user, None);
    assert_eq!(
        snapshot.last_error.as_deref(),
        Some("Incorrect email or password.")
    );
}

#[tokio::test]
async fn sign_up_conflict_surfaces_the_provider_message() {
    let gateway = gateway(true);

    let err = gateway
        .sign_up("kari@example.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "That email address is already in use.");
}

#[tokio::test]
async fn sign_out_clears_both_fields_atomically() {
    let gateway = gateway(false);
    let mut session = gateway.subscribe();

    gateway.sign_in("kari@example.com", "hunter2").await.unwrap();
    session.changed().await.unwrap();
    session.borrow_and_update();

    gateway.sign_out().await;
    session.changed().await.unwrap();
    let snapshot = session.borrow_and_update().clone();
    assert!(!snapshot.authenticated);
    assert_eq!(snapshot.user, None);
}

#[tokio::test]
async fn external_events_mirror_through_the_same_dispatcher() {
    let gateway = gateway(false);
    let mut session = gateway.subscribe();

    gateway.sign_in("kari@example.com", "hunter2").await.unwrap();
    session.changed().await.unwrap();
    session.borrow_and_update();

    // Sign-out observed on another device.
    gateway.emit(SessionEvent::SignedOut).await;
    session.changed().await.unwrap();
    assert!(!session.borrow_and_update().authenticated);
}

#[tokio::test]
async fn password_reset_does_not_touch_the_session() {
    let gateway = gateway(false);
    let session = gateway.subscribe();

    gateway
        .request_password_reset("kari@example.com")
        .await
        .unwrap();
    assert_eq!(*session.borrow(), AuthSession::default());
}
