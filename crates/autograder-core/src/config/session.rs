//! Session provider configuration.

use serde::{Deserialize, Serialize};

/// Settings for the session provider's initial resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bounded wait for the initial session lookup, in seconds.
    ///
    /// When the identity provider does not answer within this window the
    /// lookup is reported and treated as "no session"; the resolving flag
    /// must never hang.
    #[serde(default = "default_init_timeout")]
    pub init_timeout_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            init_timeout_seconds: default_init_timeout(),
        }
    }
}

fn default_init_timeout() -> u64 {
    10
}
