//! Shared test helpers for integration tests.

use std::sync::Arc;

use autograder_app::state::AppState;
use autograder_core::config::AppConfig;
use autograder_core::config::auth::AuthConfig;
use autograder_core::config::logging::LoggingConfig;
use autograder_core::config::provider::ProviderConfig;
use autograder_core::config::session::SessionConfig;
use autograder_entity::session::SessionState;
use autograder_entity::user::{Identity, UserMetadata};
use autograder_provider::{IdentityProvider, MockIdentityProvider, MockProfileStore, ProfileStore};

/// Test application context wired against the mock collaborators.
pub struct TestApp {
    /// The application state under test.
    pub state: AppState,
    /// The scripted identity provider.
    pub identity: Arc<MockIdentityProvider>,
    /// The recording profile store.
    pub profiles: Arc<MockProfileStore>,
}

impl TestApp {
    /// Create a test application. The session provider starts unresolved;
    /// call [`start`](Self::start) to subscribe and resolve.
    pub fn new() -> Self {
        let identity = Arc::new(MockIdentityProvider::new());
        let profiles = Arc::new(MockProfileStore::new());

        let identity_provider: Arc<dyn IdentityProvider> = identity.clone();
        let profile_store: Arc<dyn ProfileStore> = profiles.clone();
        let state = AppState::new(Arc::new(test_config()), identity_provider, profile_store);

        Self {
            state,
            identity,
            profiles,
        }
    }

    /// Subscribe to change notifications and resolve the initial session,
    /// the way application start does. Returns the resolved snapshot.
    pub async fn start(&self) -> SessionState {
        self.state.sessions.subscribe_changes();
        self.state.sessions.initialize().await
    }

    /// Seed an account on the mock provider.
    pub fn seed_account(&self, email: &str, password: &str, name: &str, role: &str) -> Identity {
        self.identity
            .register(email, password, UserMetadata::new(name, role))
    }
}

/// Configuration used by every integration test.
pub fn test_config() -> AppConfig {
    AppConfig {
        provider: ProviderConfig {
            base_url: "http://localhost:54321".to_string(),
            api_key: "test-key".to_string(),
            request_timeout_seconds: 5,
            change_channel_capacity: 16,
        },
        auth: AuthConfig::default(),
        session: SessionConfig {
            init_timeout_seconds: 2,
        },
        logging: LoggingConfig::default(),
    }
}
