//! The external relational profile store, behind a trait.

pub mod mock;
pub mod rest;

pub use mock::MockProfileStore;
pub use rest::RestProfileStore;

use async_trait::async_trait;

use autograder_core::AppResult;
use autograder_entity::profile::NewProfile;

/// Row insertion into the role-specific profile tables.
///
/// Invoked once, best-effort, immediately after a successful sign-up.
/// Failures map to `AppError::profile_write`; the caller decides whether to
/// surface them (the signup flow currently logs and swallows — see
/// DESIGN.md).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert one profile row into its table.
    async fn insert(&self, profile: &NewProfile) -> AppResult<()>;
}
