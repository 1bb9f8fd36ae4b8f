//! Navigator — applies the route guard to each navigation.

use std::sync::Arc;

use tracing::debug;

use autograder_auth::guard::{self, RouteDecision};
use autograder_auth::session::SessionProvider;

use crate::routes::Route;

/// What the caller should present for a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Show a neutral waiting state; the initial resolution is in flight.
    /// Re-resolve once the session state settles.
    Pending,
    /// Render the requested route.
    Render(Route),
    /// Navigate to another route instead (always login here).
    Redirect(Route),
    /// Show an access-denied indication in place.
    Denied,
}

/// Per-navigation decision maker over the session provider's snapshots.
#[derive(Clone)]
pub struct Navigator {
    sessions: Arc<SessionProvider>,
}

impl Navigator {
    /// Create a navigator reading from the given session provider.
    pub fn new(sessions: Arc<SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Decide the outcome for navigating to `route` against the current
    /// session snapshot. Public routes render unconditionally.
    pub fn resolve(&self, route: Route) -> NavOutcome {
        let Some(required) = route.required_roles() else {
            return NavOutcome::Render(route);
        };

        let state = self.sessions.current();
        let decision = guard::decide(&state, Some(required));
        debug!(route = %route, ?decision, seq = state.seq, "Navigation resolved");

        match decision {
            RouteDecision::Pending => NavOutcome::Pending,
            RouteDecision::Render => NavOutcome::Render(route),
            RouteDecision::RedirectLogin => NavOutcome::Redirect(Route::Login),
            RouteDecision::Deny => NavOutcome::Denied,
        }
    }

    /// Like [`resolve`](Self::resolve), but waits out the initial
    /// resolution first so the outcome is never `Pending`.
    pub async fn resolve_settled(&self, route: Route) -> NavOutcome {
        let mut rx = self.sessions.watch();
        loop {
            if !rx.borrow_and_update().resolving {
                break;
            }
            if rx.changed().await.is_err() {
                // Provider dropped; fall through with the last snapshot.
                break;
            }
        }
        self.resolve(route)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").finish()
    }
}
