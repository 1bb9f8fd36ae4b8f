//! AutoGrader Client — development entry point.
//!
//! Wires the REST collaborators to the session provider, resolves the
//! initial session, subscribes to change notifications, and idles until
//! shutdown. An embedding UI drives the same `AppState` surface.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use autograder_app::state::AppState;
use autograder_core::config::AppConfig;
use autograder_core::error::AppError;
use autograder_provider::{RestIdentityProvider, RestProfileStore};

// Current-thread runtime: the application is a single-threaded event loop.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env = std::env::var("AUTOGRADER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main client run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AutoGrader client v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: External collaborators ───────────────────────────
    let identity_provider = Arc::new(RestIdentityProvider::new(&config.provider)?);
    let profile_store = Arc::new(RestProfileStore::new(&config.provider)?);
    tracing::info!(base_url = %config.provider.base_url, "Provider clients ready");

    // ── Step 2: Application state ────────────────────────────────
    let state = AppState::new(Arc::new(config), identity_provider, profile_store);

    // ── Step 3: Session subscription + initial resolution ────────
    let listener = state.sessions.subscribe_changes();
    let snapshot = state.sessions.initialize().await;

    match &snapshot.identity {
        Some(identity) => tracing::info!(
            user_id = %identity.id,
            role = ?identity.role,
            "Session restored"
        ),
        None => tracing::info!("No prior session; starting signed out"),
    }

    // ── Step 4: Idle until shutdown ──────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received");

    listener.abort();
    tracing::info!("AutoGrader client shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
