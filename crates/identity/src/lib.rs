//! Identity gateway for the Cascade client.
//!
//! Wraps a managed external identity service behind a small trait, and
//! mirrors every session change — whether triggered by our own calls or
//! observed externally — through one event channel into a watchable
//! [`AuthSession`] snapshot. Readers never see the flag and the user
//! identity out of step.
//!
//! Nothing in this crate retries: every failure is terminal per call and
//! surfaced verbatim for the user to act on.

pub use error::IdentityError;
pub use provider::{AuthUser, IdentityProvider};
pub use rest::{RestConfig, RestProvider};
pub use session::{AuthSession, IdentityGateway, SessionEvent, SessionUser};

mod error;
mod provider;
mod rest;
mod session;

type ResultIdentity<T> = Result<T, IdentityError>;
