//! Login form controller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use autograder_auth::session::SessionProvider;
use autograder_core::result::AppResult;
use autograder_entity::user::Role;
use autograder_provider::IdentityProvider;

use crate::routes::Route;

/// Login form input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// What the login page does after a successful sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Navigate to the signed-in role's dashboard.
    Dashboard(Route),
    /// Signed in, but the identity carries no assigned role. The page shows
    /// the blocking "No role assigned. Contact admin." notice and stays put.
    NoRoleAssigned,
}

/// Controller behind the login page.
pub struct LoginForm {
    provider: Arc<dyn IdentityProvider>,
    sessions: Arc<SessionProvider>,
}

impl LoginForm {
    /// Create the controller.
    pub fn new(provider: Arc<dyn IdentityProvider>, sessions: Arc<SessionProvider>) -> Self {
        Self { provider, sessions }
    }

    /// Submit the form.
    ///
    /// Provider errors (bad credentials, network) propagate to the caller,
    /// which surfaces them as a blocking notice. The session commit is
    /// ticketed at initiation so a slow response can never clobber a newer
    /// provider notification.
    pub async fn submit(&self, request: LoginRequest) -> AppResult<LoginOutcome> {
        request.validate().map_err(super::validation_error)?;

        let ticket = self.sessions.begin_update();
        let identity = self
            .provider
            .sign_in(&request.email, &request.password)
            .await?;

        info!(user_id = %identity.id, role = ?identity.role, "Login succeeded");
        self.sessions.commit(ticket, Some(identity.clone()));

        Ok(match identity.role {
            Some(Role::Student) => LoginOutcome::Dashboard(Route::DashboardStudent),
            Some(Role::Teacher) => LoginOutcome::Dashboard(Route::DashboardTeacher),
            None => LoginOutcome::NoRoleAssigned,
        })
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm").finish()
    }
}
