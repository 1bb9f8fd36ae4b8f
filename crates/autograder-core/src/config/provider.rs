//! Identity-provider endpoint configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the external identity provider and profile store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the backend-as-a-service project.
    pub base_url: String,
    /// Publishable API key sent with every request.
    pub api_key: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Capacity of the session-change notification channel.
    #[serde(default = "default_change_capacity")]
    pub change_channel_capacity: usize,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_change_capacity() -> usize {
    16
}
