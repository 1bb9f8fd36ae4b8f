//! Route guard — per-navigation render/redirect/deny decisions.

use autograder_entity::session::SessionState;
use autograder_entity::user::Role;

/// Outcome of a route authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The initial session resolution is still in flight. Not a terminal
    /// decision: the caller shows a neutral waiting state and re-invokes
    /// once the state resolves.
    Pending,
    /// Render the requested view.
    Render,
    /// Not logged in; send the user to the login route.
    RedirectLogin,
    /// Logged in with the wrong (or no) role; show an access-denied
    /// indication in place. Deliberately distinct from `RedirectLogin` so
    /// "not logged in" and "wrong role" stay distinguishable.
    Deny,
}

/// Decide whether a navigation may render, based solely on the current
/// session snapshot and the route's required roles.
///
/// `required` absent or empty means any authenticated identity is enough.
/// An identity with no assigned role passes the generic check but fails
/// every role-gated one.
pub fn decide(state: &SessionState, required: Option<&[Role]>) -> RouteDecision {
    if state.resolving {
        return RouteDecision::Pending;
    }

    if !state.is_authenticated() {
        return RouteDecision::RedirectLogin;
    }

    if let Some(required) = required {
        if !required.is_empty() {
            match state.role() {
                Some(role) if required.contains(&role) => {}
                _ => return RouteDecision::Deny,
            }
        }
    }

    RouteDecision::Render
}
