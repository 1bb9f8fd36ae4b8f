//! Signup form controller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::Validate;

use autograder_auth::password::PasswordValidator;
use autograder_core::result::AppResult;
use autograder_entity::profile::{NewProfile, NewStudentProfile, NewTeacherProfile};
use autograder_entity::user::{Role, UserMetadata};
use autograder_provider::{IdentityProvider, ProfileStore};

use crate::routes::Route;

/// Signup form input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Chosen password; checked against the password policy.
    pub password: String,
    /// Selected role.
    pub role: Role,
}

/// Result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    /// Notice shown to the user.
    pub notice: String,
    /// Where the page navigates next.
    pub next: Route,
}

/// Controller behind the signup page.
pub struct SignupForm {
    provider: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileStore>,
    passwords: PasswordValidator,
}

impl SignupForm {
    /// Create the controller.
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileStore>,
        passwords: PasswordValidator,
    ) -> Self {
        Self {
            provider,
            profiles,
            passwords,
        }
    }

    /// Submit the form.
    ///
    /// Creates the auth identity with `{full_name, role}` metadata, then
    /// writes the denormalized profile row for the selected role. The
    /// insert is best-effort: a failure is logged and not surfaced, and the
    /// created identity is not rolled back (see DESIGN.md — the observed
    /// contract is preserved, not endorsed).
    pub async fn submit(&self, request: SignupRequest) -> AppResult<SignupOutcome> {
        request.validate().map_err(super::validation_error)?;
        self.passwords.validate(&request.password)?;

        let metadata = UserMetadata::new(request.full_name.clone(), request.role.as_str());
        let identity = self
            .provider
            .sign_up(&request.email, &request.password, metadata)
            .await?;

        info!(user_id = %identity.id, role = %request.role, "Sign-up succeeded");

        let profile = match request.role {
            Role::Student => NewProfile::Student(NewStudentProfile::for_identity(
                identity.id,
                &request.full_name,
                &request.email,
            )),
            Role::Teacher => NewProfile::Teacher(NewTeacherProfile::for_identity(
                identity.id,
                &request.full_name,
                &request.email,
            )),
        };

        if let Err(e) = self.profiles.insert(&profile).await {
            warn!(
                user_id = %identity.id,
                table = %profile.table(),
                error = %e,
                "Profile insert failed after sign-up; identity remains without a profile row"
            );
        }

        Ok(SignupOutcome {
            notice: "Signup successful! Please login.".to_string(),
            next: Route::Login,
        })
    }
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm").finish()
    }
}
