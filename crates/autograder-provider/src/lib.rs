//! # autograder-provider
//!
//! External collaborators of the AutoGrader client, behind traits:
//!
//! - `identity` — the identity provider (sessions, sign-in/up, password
//!   reset) with a REST implementation and an in-memory mock
//! - `profile` — the relational profile store written to after sign-up
//!
//! All provider errors are mapped into [`autograder_core::AppError`].

pub mod identity;
pub mod profile;

pub use identity::{IdentityProvider, MockIdentityProvider, RestIdentityProvider};
pub use profile::{MockProfileStore, ProfileStore, RestProfileStore};
