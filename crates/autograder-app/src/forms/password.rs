//! Forgot-password and reset-password form controllers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use autograder_auth::password::PasswordValidator;
use autograder_core::result::AppResult;
use autograder_provider::IdentityProvider;

/// Forgot-password form input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Email to send the reset link to.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Controller behind the forgot-password page.
pub struct ForgotPasswordForm {
    provider: Arc<dyn IdentityProvider>,
    redirect_to: String,
}

impl ForgotPasswordForm {
    /// Create the controller. `redirect_to` is where the emailed link
    /// lands, from configuration.
    pub fn new(provider: Arc<dyn IdentityProvider>, redirect_to: impl Into<String>) -> Self {
        Self {
            provider,
            redirect_to: redirect_to.into(),
        }
    }

    /// Submit the form. Returns the notice shown on success.
    pub async fn submit(&self, request: ForgotPasswordRequest) -> AppResult<String> {
        request.validate().map_err(super::validation_error)?;

        self.provider
            .send_password_reset(&request.email, &self.redirect_to)
            .await?;

        info!(email = %request.email, "Password-reset email requested");
        Ok("Check your email for reset link.".to_string())
    }
}

/// Reset-password form input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// The new password; checked against the password policy.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Controller behind the reset-password page reached from the emailed link.
pub struct ResetPasswordForm {
    provider: Arc<dyn IdentityProvider>,
    passwords: PasswordValidator,
}

impl ResetPasswordForm {
    /// Create the controller.
    pub fn new(provider: Arc<dyn IdentityProvider>, passwords: PasswordValidator) -> Self {
        Self {
            provider,
            passwords,
        }
    }

    /// Submit the form. Returns the notice shown on success.
    pub async fn submit(&self, request: ResetPasswordRequest) -> AppResult<String> {
        request.validate().map_err(super::validation_error)?;
        self.passwords.validate(&request.password)?;

        self.provider.update_password(&request.password).await?;

        info!("Password updated");
        Ok("Password updated successfully!".to_string())
    }
}

impl std::fmt::Debug for ForgotPasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgotPasswordForm")
            .field("redirect_to", &self.redirect_to)
            .finish()
    }
}

impl std::fmt::Debug for ResetPasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordForm").finish()
    }
}
