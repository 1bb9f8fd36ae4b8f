//! Shared application state wired at startup.

use std::sync::Arc;

use autograder_auth::password::PasswordValidator;
use autograder_auth::session::SessionProvider;
use autograder_core::config::AppConfig;
use autograder_provider::{IdentityProvider, ProfileStore};

use crate::forms::{ForgotPasswordForm, LoginForm, ResetPasswordForm, SignupForm};
use crate::nav::Navigator;

/// Everything the pages need, bundled once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The external identity provider.
    pub identity_provider: Arc<dyn IdentityProvider>,
    /// The external profile store.
    pub profile_store: Arc<dyn ProfileStore>,
    /// The session provider.
    pub sessions: Arc<SessionProvider>,
    /// The navigator applying the route guard.
    pub navigator: Navigator,
}

impl AppState {
    /// Wire the state from configuration and the two external collaborators.
    pub fn new(
        config: Arc<AppConfig>,
        identity_provider: Arc<dyn IdentityProvider>,
        profile_store: Arc<dyn ProfileStore>,
    ) -> Self {
        let sessions = Arc::new(SessionProvider::new(
            Arc::clone(&identity_provider),
            config.session.clone(),
        ));
        let navigator = Navigator::new(Arc::clone(&sessions));

        Self {
            config,
            identity_provider,
            profile_store,
            sessions,
            navigator,
        }
    }

    /// The login page controller.
    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(
            Arc::clone(&self.identity_provider),
            Arc::clone(&self.sessions),
        )
    }

    /// The signup page controller.
    pub fn signup_form(&self) -> SignupForm {
        SignupForm::new(
            Arc::clone(&self.identity_provider),
            Arc::clone(&self.profile_store),
            self.password_validator(),
        )
    }

    /// The forgot-password page controller.
    pub fn forgot_password_form(&self) -> ForgotPasswordForm {
        ForgotPasswordForm::new(
            Arc::clone(&self.identity_provider),
            self.config.auth.reset_redirect_to.clone(),
        )
    }

    /// The reset-password page controller.
    pub fn reset_password_form(&self) -> ResetPasswordForm {
        ResetPasswordForm::new(
            Arc::clone(&self.identity_provider),
            self.password_validator(),
        )
    }

    fn password_validator(&self) -> PasswordValidator {
        PasswordValidator::new(&self.config.auth)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
