//! The external identity provider, behind a trait.

pub mod mock;
pub mod rest;

pub use mock::MockIdentityProvider;
pub use rest::RestIdentityProvider;

use async_trait::async_trait;
use tokio::sync::broadcast;

use autograder_core::AppResult;
use autograder_entity::session::SessionChange;
use autograder_entity::user::{Identity, UserMetadata};

/// Operations the client consumes from the external identity provider.
///
/// Implementations own credential handling, token storage, and session
/// persistence; the client only ever sees [`Identity`] values and change
/// notifications. Every fallible operation maps failures into
/// `AppError::provider`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Ask the provider for the existing session, if the browser already
    /// holds one from a prior visit.
    ///
    /// `Ok(None)` means "not logged in" and is not an error.
    async fn current_session(&self) -> AppResult<Option<Identity>>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity>;

    /// Create a new account with the given metadata attached.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> AppResult<Identity>;

    /// Send a password-reset email with a link redirecting to `redirect_to`.
    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> AppResult<()>;

    /// Set a new password for the currently authenticated user (the
    /// recovery session established by the reset link).
    async fn update_password(&self, new_password: &str) -> AppResult<()>;

    /// Subscribe to session-change notifications.
    ///
    /// The returned receiver stays valid for the life of the provider; the
    /// client registers exactly one durable listener at startup.
    fn subscribe(&self) -> broadcast::Receiver<SessionChange>;
}
