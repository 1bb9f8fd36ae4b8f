//! Route table.

use serde::{Deserialize, Serialize};
use std::fmt;

use autograder_entity::user::Role;

/// Every navigable view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Public landing page.
    Home,
    /// Login form.
    Login,
    /// Signup form.
    Signup,
    /// Request a password-reset email.
    ForgotPassword,
    /// Set a new password from a reset link.
    ResetPassword,
    /// Student dashboard. Requires the student role.
    DashboardStudent,
    /// Teacher dashboard. Requires the teacher role.
    DashboardTeacher,
}

impl Route {
    /// All routes, in navigation-table order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Login,
        Route::Signup,
        Route::ForgotPassword,
        Route::ResetPassword,
        Route::DashboardStudent,
        Route::DashboardTeacher,
    ];

    /// The URL path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::DashboardStudent => "/dashboard/student",
            Self::DashboardTeacher => "/dashboard/teacher",
        }
    }

    /// Look a route up by its URL path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// The roles allowed to open this route. `None` means the route is
    /// public and the guard is not consulted.
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::DashboardStudent => Some(&[Role::Student]),
            Self::DashboardTeacher => Some(&[Role::Teacher]),
            _ => None,
        }
    }

    /// Whether this route goes through the route guard.
    pub fn is_protected(&self) -> bool {
        self.required_roles().is_some()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
