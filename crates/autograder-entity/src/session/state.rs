//! Client-held session state snapshot.

use serde::{Deserialize, Serialize};

use crate::user::{Identity, Role};

/// The session provider's current knowledge about who is logged in.
///
/// Snapshots are immutable values handed to readers; only the session
/// provider produces new ones. `resolving` is true from application start
/// until the first session lookup completes, transitions to false exactly
/// once, and never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// The authenticated identity, if any.
    pub identity: Option<Identity>,
    /// True until the initial session lookup completes.
    pub resolving: bool,
    /// Monotonically increasing update sequence token. Later snapshots
    /// always carry a strictly larger value.
    pub seq: u64,
}

impl SessionState {
    /// The sole initial state: unresolved, no identity.
    pub fn unresolved() -> Self {
        Self {
            identity: None,
            resolving: true,
            seq: 0,
        }
    }

    /// The derived role.
    ///
    /// Always recomputed from the current identity so it can never go stale
    /// relative to it. Absent when there is no identity or the identity is
    /// unassigned.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().and_then(|i| i.role)
    }

    /// Whether an identity is present (regardless of role).
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::unresolved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{Identity, UserMetadata};
    use uuid::Uuid;

    fn identity(role: &str) -> Identity {
        Identity::from_provider(
            Uuid::new_v4(),
            "someone@example.com",
            UserMetadata::new("Someone", role),
            None,
        )
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::unresolved();
        assert!(state.resolving);
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), None);
    }

    #[test]
    fn test_role_is_derived_from_identity() {
        let mut state = SessionState::unresolved();
        state.resolving = false;
        state.identity = Some(identity("student"));
        assert_eq!(state.role(), Some(Role::Student));

        // Replacing the identity replaces the derived role with it.
        state.identity = Some(identity("teacher"));
        assert_eq!(state.role(), Some(Role::Teacher));

        state.identity = None;
        assert_eq!(state.role(), None);
    }
}
