//! Session state and change notification models.

pub mod change;
pub mod state;

pub use change::{ChangeKind, SessionChange};
pub use state::SessionState;
