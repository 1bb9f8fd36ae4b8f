//! Student dashboard view model.

use serde::{Deserialize, Serialize};

use autograder_entity::session::SessionState;
use autograder_entity::user::Role;

use crate::routes::Route;

/// Data backing the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDashboard {
    /// Welcome line, e.g. `Welcome Student Sam Carter`.
    pub greeting: String,
}

impl StudentDashboard {
    /// Build the view from the current session.
    ///
    /// Redundant render-time check: without a student identity the
    /// dashboard redirects to login rather than relying on the guard alone.
    pub fn build(state: &SessionState) -> Result<Self, Route> {
        let Some(identity) = &state.identity else {
            return Err(Route::Login);
        };
        if !identity.has_role(Role::Student) {
            return Err(Route::Login);
        }

        let name = identity.full_name().unwrap_or(&identity.email);
        Ok(Self {
            greeting: format!("Welcome Student {name}"),
        })
    }
}
