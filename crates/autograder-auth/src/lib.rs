//! # autograder-auth
//!
//! Session handling and authorization for the AutoGrader client.
//!
//! ## Modules
//!
//! - `session` — the session provider: single source of truth for "who is
//!   logged in and with what role", fed by the identity provider's initial
//!   lookup and change notifications
//! - `guard` — the route guard deciding render/redirect/deny per navigation
//! - `password` — password policy enforcement for signup and reset forms

pub mod guard;
pub mod password;
pub mod session;

pub use guard::RouteDecision;
pub use password::PasswordValidator;
pub use session::{SessionProvider, UpdateTicket};
