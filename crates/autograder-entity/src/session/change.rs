//! Session-change notifications pushed by the identity provider.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::user::Identity;

/// Why the provider pushed a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A sign-in completed (possibly in another tab).
    SignedIn,
    /// The user signed out.
    SignedOut,
    /// The access token was refreshed; the identity may carry updated
    /// metadata.
    TokenRefreshed,
    /// The user record was updated (e.g. password change).
    UserUpdated,
    /// The session expired server-side.
    Expired,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SignedIn => "signed_in",
            Self::SignedOut => "signed_out",
            Self::TokenRefreshed => "token_refreshed",
            Self::UserUpdated => "user_updated",
            Self::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// One push notification from the identity provider.
///
/// `identity` is the complete new value — `None` for sign-out and expiry.
/// The session provider replaces its held identity with this value; it never
/// merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionChange {
    /// What happened.
    pub kind: ChangeKind,
    /// The identity after the change, if any.
    pub identity: Option<Identity>,
}

impl SessionChange {
    /// A sign-in notification carrying the new identity.
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            kind: ChangeKind::SignedIn,
            identity: Some(identity),
        }
    }

    /// A sign-out notification.
    pub fn signed_out() -> Self {
        Self {
            kind: ChangeKind::SignedOut,
            identity: None,
        }
    }

    /// An expiry notification.
    pub fn expired() -> Self {
        Self {
            kind: ChangeKind::Expired,
            identity: None,
        }
    }
}
