//! Integration tests for session resolution and change handling.

mod common;

use std::time::Duration;

use autograder_app::nav::NavOutcome;
use autograder_app::routes::Route;
use autograder_entity::session::SessionChange;

use common::TestApp;

#[tokio::test]
async fn test_fresh_load_without_prior_session() {
    let app = TestApp::new();

    // Before resolution every protected navigation is pending.
    assert!(app.state.sessions.current().resolving);
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Pending
    );

    let state = app.start().await;
    assert!(!state.resolving);
    assert!(state.identity.is_none());

    // Resolved and signed out: the dashboard redirects to login.
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_public_routes_render_while_resolving() {
    let app = TestApp::new();

    // The guard is only consulted for protected routes; the landing and
    // auth pages render regardless of resolution state.
    assert_eq!(
        app.state.navigator.resolve(Route::Home),
        NavOutcome::Render(Route::Home)
    );
    assert_eq!(
        app.state.navigator.resolve(Route::Login),
        NavOutcome::Render(Route::Login)
    );
}

#[tokio::test]
async fn test_existing_session_is_restored_on_start() {
    let app = TestApp::new();
    let identity = app.seed_account("ada@example.com", "pw", "Ada Lovelace", "teacher");
    app.identity.set_session(Some(identity.clone()));

    let state = app.start().await;
    assert_eq!(state.identity, Some(identity));

    assert_eq!(
        app.state.navigator.resolve(Route::DashboardTeacher),
        NavOutcome::Render(Route::DashboardTeacher)
    );
}

#[tokio::test]
async fn test_resolve_settled_waits_out_the_initial_lookup() {
    let app = TestApp::new();
    app.identity.set_session_delay(Duration::from_millis(50));

    let navigator = app.state.navigator.clone();
    let settled = tokio::spawn(async move {
        navigator.resolve_settled(Route::DashboardStudent).await
    });

    app.start().await;
    assert_eq!(
        settled.await.expect("resolve task panicked"),
        NavOutcome::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_sign_out_notification_while_dashboard_is_open() {
    let app = TestApp::new();
    let identity = app.seed_account("sam@example.com", "pw", "Sam Carter", "student");
    app.identity.set_session(Some(identity));
    app.start().await;

    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Render(Route::DashboardStudent)
    );

    // The provider reports a sign-out while the dashboard is rendered.
    let mut rx = app.state.sessions.watch();
    app.identity.push(SessionChange::signed_out());
    rx.changed().await.expect("state channel closed");

    let state = app.state.sessions.current();
    assert!(state.identity.is_none());
    assert!(!state.resolving);

    // The next navigation decision redirects to login.
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_expiry_notification_signs_the_user_out() {
    let app = TestApp::new();
    let identity = app.seed_account("ada@example.com", "pw", "Ada Lovelace", "teacher");
    app.identity.set_session(Some(identity));
    app.start().await;

    let mut rx = app.state.sessions.watch();
    app.identity.push(SessionChange::expired());
    rx.changed().await.expect("state channel closed");

    // Expiry and never-logged-in are indistinguishable to the caller: both
    // redirect to login with no further detail.
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardTeacher),
        NavOutcome::Redirect(Route::Login)
    );
}

#[tokio::test]
async fn test_snapshots_are_identical_between_notifications() {
    let app = TestApp::new();
    let identity = app.seed_account("kim@example.com", "pw", "Kim", "student");
    app.identity.set_session(Some(identity));
    app.start().await;

    let first = app.state.sessions.current();
    let second = app.state.sessions.current();
    assert_eq!(first, second);
}
