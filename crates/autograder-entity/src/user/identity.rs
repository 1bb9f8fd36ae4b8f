//! Identity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metadata::UserMetadata;
use super::role::Role;

/// An authenticated principal as reported by the external identity provider.
///
/// Identities are created by the provider at sign-in/sign-up, held by the
/// session provider for the life of the browser session, and replaced (never
/// mutated) when the provider signals a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-issued identifier.
    pub id: Uuid,
    /// Email address the account was registered with.
    pub email: String,
    /// Raw metadata attached at sign-up.
    pub metadata: UserMetadata,
    /// Typed role, computed once from `metadata.role` at the provider
    /// boundary. `None` means unassigned.
    pub role: Option<Role>,
    /// When the account was created, if the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Build an identity from provider-reported parts, deriving the typed
    /// role from the metadata exactly once.
    pub fn from_provider(
        id: Uuid,
        email: impl Into<String>,
        metadata: UserMetadata,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        let role = Role::parse_opt(metadata.role.as_deref());
        Self {
            id,
            email: email.into(),
            metadata,
            role,
            created_at,
        }
    }

    /// The person's full name, when the metadata carries one.
    pub fn full_name(&self) -> Option<&str> {
        self.metadata.full_name.as_deref()
    }

    /// Whether this identity carries the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}
