//! Session lifecycle provider — initial resolution, change subscription,
//! and ordered state commits.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use autograder_core::config::session::SessionConfig;
use autograder_entity::session::SessionState;
use autograder_entity::user::Identity;
use autograder_provider::IdentityProvider;

/// Token ordering a state mutation relative to all others.
///
/// Tickets are allocated from a shared monotonic counter: a sign-in call
/// takes its ticket when the call is initiated, the change listener takes
/// one per notification at receipt. A commit whose ticket is older than the
/// last applied one is discarded, so a stale completion can never overwrite
/// a newer notification-derived identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTicket(u64);

/// Single source of truth for the current authenticated identity.
///
/// State lives in a `watch` channel: readers take snapshots or await
/// changes; every mutation goes through this provider. The initialize path
/// and the change-listener path are the only writers, plus explicitly
/// ticketed commits from the sign-in form.
pub struct SessionProvider {
    provider: Arc<dyn IdentityProvider>,
    state: watch::Sender<SessionState>,
    next_seq: AtomicU64,
    config: SessionConfig,
}

impl SessionProvider {
    /// Create a provider in the sole initial state: unresolved, no identity.
    pub fn new(provider: Arc<dyn IdentityProvider>, config: SessionConfig) -> Self {
        let (state, _) = watch::channel(SessionState::unresolved());
        Self {
            provider,
            state,
            next_seq: AtomicU64::new(1),
            config,
        }
    }

    /// Resolve the initial session, once, at application start.
    ///
    /// Asks the identity provider for an existing session under a bounded
    /// wait. Success and "no session" both resolve the state; provider
    /// errors are treated as "no session". The resolving flag is cleared on
    /// every path — it must never hang.
    ///
    /// Returns the snapshot after resolution.
    pub async fn initialize(&self) -> SessionState {
        let ticket = self.begin_update();
        let wait = Duration::from_secs(self.config.init_timeout_seconds);

        let identity = match tokio::time::timeout(wait, self.provider.current_session()).await {
            Ok(Ok(session)) => {
                match &session {
                    Some(identity) => info!(
                        user_id = %identity.id,
                        role = ?identity.role,
                        "Existing session restored"
                    ),
                    None => debug!("No existing session"),
                }
                session
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Session lookup failed; treating as no session");
                None
            }
            Err(_) => {
                error!(
                    waited_seconds = wait.as_secs(),
                    "Session lookup did not complete within the bounded wait; \
                     treating as no session"
                );
                None
            }
        };

        self.state.send_modify(|state| {
            state.resolving = false;
            if ticket.0 > state.seq {
                state.identity = identity;
                state.seq = ticket.0;
            }
        });

        self.current()
    }

    /// Register the durable change listener, once, at application start.
    ///
    /// The spawned task consumes provider notifications for the life of the
    /// application, applying each to the state synchronously with respect
    /// to observers. It is only torn down with the application itself.
    pub fn subscribe_changes(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        let mut rx = this.provider.subscribe();

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(change) => {
                        let ticket = this.begin_update();
                        let kind = change.kind;
                        let applied = this.commit(ticket, change.identity);
                        debug!(%kind, seq = ticket.0, applied, "Session change received");
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        warn!(missed, "Change listener lagged; continuing with latest");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("Change channel closed; listener exiting");
                        break;
                    }
                }
            }
        })
    }

    /// The current session state snapshot. Pure read; idempotent between
    /// updates.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// A receiver for awaiting state changes. Readers get snapshots only;
    /// they cannot mutate.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Allocate an ordering ticket. Call at the *initiation* of an
    /// identity-affecting operation, before any await.
    pub fn begin_update(&self) -> UpdateTicket {
        UpdateTicket(self.next_seq.fetch_add(1, Ordering::Relaxed))
    }

    /// Apply an identity under the given ticket.
    ///
    /// Returns false when the ticket lost to a newer update, in which case
    /// the state is untouched. The resolving flag is never modified here;
    /// only `initialize` clears it.
    pub fn commit(&self, ticket: UpdateTicket, identity: Option<Identity>) -> bool {
        let mut applied = false;
        self.state.send_if_modified(|state| {
            if ticket.0 > state.seq {
                state.identity = identity;
                state.seq = ticket.0;
                applied = true;
                true
            } else {
                false
            }
        });
        applied
    }
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider")
            .field("config", &self.config)
            .field("state", &*self.state.borrow())
            .finish()
    }
}
