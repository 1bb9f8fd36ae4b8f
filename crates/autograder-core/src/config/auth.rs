//! Authentication form configuration.

use serde::{Deserialize, Serialize};

/// Settings applied by the signup and password-reset forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum zxcvbn entropy score (0-4) accepted for new passwords.
    #[serde(default = "default_min_score")]
    pub password_min_score: u8,
    /// Target the reset-link email redirects back to.
    #[serde(default = "default_reset_redirect")]
    pub reset_redirect_to: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            password_min_score: default_min_score(),
            reset_redirect_to: default_reset_redirect(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_min_score() -> u8 {
    3
}

fn default_reset_redirect() -> String {
    "http://localhost:5173/reset-password".to_string()
}
