//! User identity models.

pub mod identity;
pub mod metadata;
pub mod role;

pub use identity::Identity;
pub use metadata::UserMetadata;
pub use role::Role;
