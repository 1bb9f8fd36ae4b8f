//! REST identity provider speaking the GoTrue-style auth API.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use autograder_core::config::provider::ProviderConfig;
use autograder_core::error::AppError;
use autograder_core::result::AppResult;
use autograder_entity::session::{ChangeKind, SessionChange};
use autograder_entity::user::{Identity, UserMetadata};

use super::IdentityProvider;

/// The raw user object returned by the auth API.
#[derive(Debug, Deserialize)]
struct RawUser {
    id: Uuid,
    email: String,
    #[serde(default)]
    user_metadata: UserMetadata,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl RawUser {
    /// The provider boundary: raw metadata becomes a typed identity here
    /// and nowhere else.
    fn into_identity(self) -> Identity {
        Identity::from_provider(self.id, self.email, self.user_metadata, self.created_at)
    }
}

/// Response body of the password-grant token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: RawUser,
}

/// Response body of the signup endpoint.
///
/// The API answers with a bare user object when the project requires email
/// confirmation before first login, and with a session wrapper (the user
/// nested under `user`) otherwise. Both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignupResponse {
    Session {
        access_token: String,
        user: RawUser,
    },
    User(RawUser),
}

/// Error body shape used by the auth API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(alias = "msg", alias = "message")]
    error_description: Option<String>,
}

/// Identity provider backed by a GoTrue-style REST API.
///
/// Holds the access token of the locally established session for
/// authenticated calls and republishes auth state transitions to
/// subscribers.
pub struct RestIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    access_token: Mutex<Option<String>>,
    changes: broadcast::Sender<SessionChange>,
}

impl RestIdentityProvider {
    /// Create a provider client from configuration.
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::provider(format!("Failed to build HTTP client: {e}")))?;

        let (changes, _) = broadcast::channel(config.change_channel_capacity);

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: Mutex::new(None),
            changes,
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn stored_token(&self) -> Option<String> {
        self.access_token.lock().expect("token lock poisoned").clone()
    }

    fn store_token(&self, token: Option<String>) {
        *self.access_token.lock().expect("token lock poisoned") = token;
    }

    fn publish(&self, change: SessionChange) {
        // No subscribers yet is fine; the session provider attaches at startup.
        let _ = self.changes.send(change);
    }

    /// Map a non-success response into a provider error carrying the API's
    /// message when one is present.
    async fn error_from(response: reqwest::Response) -> AppError {
        let status = response.status();
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error_description)
            .unwrap_or_else(|| format!("HTTP {status}"));
        AppError::provider(detail)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn current_session(&self) -> AppResult<Option<Identity>> {
        let Some(token) = self.stored_token() else {
            debug!("No stored access token; reporting no session");
            return Ok(None);
        };

        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AppError::provider(format!("Session lookup failed: {e}")))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            // The stored token is no longer honored; the session is gone.
            self.store_token(None);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let user: RawUser = response
            .json()
            .await
            .map_err(|e| AppError::provider(format!("Malformed user payload: {e}")))?;

        Ok(Some(user.into_identity()))
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let response = self
            .http
            .post(format!("{}?grant_type=password", self.auth_url("token")))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::provider(format!("Sign-in request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::provider(format!("Malformed token payload: {e}")))?;

        self.store_token(Some(body.access_token));
        let identity = body.user.into_identity();
        debug!(user_id = %identity.id, "Sign-in succeeded");
        self.publish(SessionChange::signed_in(identity.clone()));

        Ok(identity)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: UserMetadata,
    ) -> AppResult<Identity> {
        let response = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": metadata,
            }))
            .send()
            .await
            .map_err(|e| AppError::provider(format!("Sign-up request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: SignupResponse = response
            .json()
            .await
            .map_err(|e| AppError::provider(format!("Malformed signup payload: {e}")))?;

        let user = match body {
            SignupResponse::Session { access_token, user } => {
                self.store_token(Some(access_token));
                user
            }
            SignupResponse::User(user) => {
                // Email confirmation pending; the user logs in afterwards.
                debug!(email = %email, "Sign-up created identity without a session");
                user
            }
        };

        Ok(user.into_identity())
    }

    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> AppResult<()> {
        let response = self
            .http
            .post(self.auth_url("recover"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({
                "email": email,
                "gotrue_meta_security": {},
                "redirect_to": redirect_to,
            }))
            .send()
            .await
            .map_err(|e| AppError::provider(format!("Reset request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    async fn update_password(&self, new_password: &str) -> AppResult<()> {
        let token = self
            .stored_token()
            .ok_or_else(|| AppError::no_session("Cannot update password without a session"))?;

        let response = self
            .http
            .put(self.auth_url("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .json(&serde_json::json!({ "password": new_password }))
            .send()
            .await
            .map_err(|e| AppError::provider(format!("Password update failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let user: RawUser = response
            .json()
            .await
            .map_err(|e| AppError::provider(format!("Malformed user payload: {e}")))?;

        let identity = user.into_identity();
        self.publish(SessionChange {
            kind: ChangeKind::UserUpdated,
            identity: Some(identity),
        });

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionChange> {
        self.changes.subscribe()
    }
}

impl std::fmt::Debug for RestIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestIdentityProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}
