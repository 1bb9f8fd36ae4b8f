//! Teacher dashboard view model.

use serde::{Deserialize, Serialize};

use autograder_entity::session::SessionState;
use autograder_entity::user::Role;

use crate::routes::Route;

/// Data backing the teacher dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherDashboard {
    /// Welcome line addressed to the teacher by name.
    pub greeting: String,
}

impl TeacherDashboard {
    /// Build the view from the current session.
    ///
    /// Same redundant render-time check as the student dashboard: a
    /// non-teacher session redirects to login.
    pub fn build(state: &SessionState) -> Result<Self, Route> {
        let Some(identity) = &state.identity else {
            return Err(Route::Login);
        };
        if !identity.has_role(Role::Teacher) {
            return Err(Route::Login);
        }

        let name = identity.full_name().unwrap_or(&identity.email);
        Ok(Self {
            greeting: format!("Welcome back {name}!"),
        })
    }
}
