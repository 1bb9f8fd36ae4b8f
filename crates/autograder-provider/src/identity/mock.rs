//! In-memory identity provider for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use autograder_core::error::AppError;
use autograder_core::result::AppResult;
use autograder_entity::session::SessionChange;
use autograder_entity::user::{Identity, UserMetadata};

use super::IdentityProvider;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    identity: Identity,
}

#[derive(Debug, Default)]
struct MockState {
    session: Option<Identity>,
    session_error: Option<AppError>,
    session_delay: Option<Duration>,
    sign_in_delay: Option<Duration>,
    sign_up_error: Option<AppError>,
    accounts: HashMap<String, Account>,
    reset_requests: Vec<(String, String)>,
    password_updates: Vec<String>,
}

/// Scripted identity provider.
///
/// Results are configured up front; `push` emits change notifications the
/// way the real provider would. Artificial delays on the session lookup and
/// sign-in calls let tests interleave completions with notifications.
#[derive(Debug)]
pub struct MockIdentityProvider {
    state: Mutex<MockState>,
    changes: broadcast::Sender<SessionChange>,
}

impl MockIdentityProvider {
    /// A provider with no prior session and no accounts.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            state: Mutex::new(MockState::default()),
            changes,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock poisoned")
    }

    /// Script the existing session returned by `current_session`.
    pub fn set_session(&self, identity: Option<Identity>) {
        self.lock().session = identity;
    }

    /// Make `current_session` fail with the given error.
    pub fn fail_current_session(&self, error: AppError) {
        self.lock().session_error = Some(error);
    }

    /// Delay `current_session` responses.
    pub fn set_session_delay(&self, delay: Duration) {
        self.lock().session_delay = Some(delay);
    }

    /// Delay `sign_in` responses.
    pub fn set_sign_in_delay(&self, delay: Duration) {
        self.lock().sign_in_delay = Some(delay);
    }

    /// Make the next `sign_up` call fail with the given error.
    pub fn fail_next_sign_up(&self, error: AppError) {
        self.lock().sign_up_error = Some(error);
    }

    /// Seed an account so `sign_in` can find it. Returns the identity the
    /// provider will report.
    pub fn register(&self, email: &str, password: &str, metadata: UserMetadata) -> Identity {
        let identity = Identity::from_provider(Uuid::new_v4(), email, metadata, None);
        self.lock().accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        identity
    }

    /// Emit a session-change notification to all subscribers.
    pub fn push(&self, change: SessionChange) {
        let _ = self.changes.send(change);
    }

    /// Reset requests recorded so far, as `(email, redirect_to)` pairs.
    pub fn reset_requests(&self) -> Vec<(String, String)> {
        self.lock().reset_requests.clone()
    }

    /// New passwords recorded by `update_password`.
    pub fn password_updates(&self) -> Vec<String> {
        self.lock().password_updates.clone()
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_session(&self) -> AppResult<Option<Identity>> {
        let (delay, result) = {
            let state = self.lock();
            let result = match &state.session_error {
                Some(err) => Err(err.clone()),
                None => Ok(state.session.clone()),
            };
            (state.session_delay, result)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        result
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let (delay, result) = {
            let state = self.lock();
            let result = match state.accounts.get(email) {
                Some(account) if account.password == password => Ok(account.identity.clone()),
                _ => Err(AppError::provider("Invalid login credentials")),
            };
            (state.sign_in_delay, result)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        result
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> AppResult<Identity> {
        let mut state = self.lock();

        if let Some(err) = state.sign_up_error.take() {
            return Err(err);
        }
        if state.accounts.contains_key(email) {
            return Err(AppError::provider("User already registered"));
        }

        let identity = Identity::from_provider(Uuid::new_v4(), email, metadata, None);
        state.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                identity: identity.clone(),
            },
        );
        debug!(email = %email, "Mock sign-up recorded");

        Ok(identity)
    }

    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> AppResult<()> {
        self.lock()
            .reset_requests
            .push((email.to_string(), redirect_to.to_string()));
        Ok(())
    }

    async fn update_password(&self, new_password: &str) -> AppResult<()> {
        self.lock().password_updates.push(new_password.to_string());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.changes.subscribe()
    }
}
