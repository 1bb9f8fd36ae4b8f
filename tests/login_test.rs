//! Integration tests for the login flow.

mod common;

use std::time::Duration;

use autograder_app::forms::{LoginOutcome, LoginRequest};
use autograder_app::nav::NavOutcome;
use autograder_app::routes::Route;
use autograder_app::views::TeacherDashboard;
use autograder_core::error::ErrorKind;
use autograder_entity::session::SessionChange;
use autograder_entity::user::UserMetadata;

use common::TestApp;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_teacher_login_routes_to_teacher_dashboard() {
    let app = TestApp::new();
    app.seed_account("ada@example.com", "password123", "Ada Lovelace", "teacher");
    app.start().await;

    let outcome = app
        .state
        .login_form()
        .submit(login("ada@example.com", "password123"))
        .await
        .expect("login failed");

    assert_eq!(outcome, LoginOutcome::Dashboard(Route::DashboardTeacher));

    // The teacher dashboard renders; the student dashboard is denied in
    // place, not redirected, so the wrong-role case stays distinguishable.
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardTeacher),
        NavOutcome::Render(Route::DashboardTeacher)
    );
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Denied
    );

    let view = TeacherDashboard::build(&app.state.sessions.current()).unwrap();
    assert_eq!(view.greeting, "Welcome back Ada Lovelace!");
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_provider_error() {
    let app = TestApp::new();
    app.seed_account("ada@example.com", "password123", "Ada Lovelace", "teacher");
    app.start().await;

    let err = app
        .state
        .login_form()
        .submit(login("ada@example.com", "wrong"))
        .await
        .expect_err("login should fail");

    assert_eq!(err.kind, ErrorKind::Provider);
    // A failed login leaves the session signed out.
    assert!(app.state.sessions.current().identity.is_none());
}

#[tokio::test]
async fn test_login_without_assigned_role_blocks_with_notice() {
    let app = TestApp::new();
    app.identity
        .register("kim@example.com", "password123", UserMetadata::new("Kim", "janitor"));
    app.start().await;

    let outcome = app
        .state
        .login_form()
        .submit(login("kim@example.com", "password123"))
        .await
        .expect("login failed");

    assert_eq!(outcome, LoginOutcome::NoRoleAssigned);

    // Logged in for generic checks, but every dashboard denies.
    let state = app.state.sessions.current();
    assert!(state.is_authenticated());
    assert_eq!(state.role(), None);
    assert_eq!(
        app.state.navigator.resolve(Route::DashboardStudent),
        NavOutcome::Denied
    );
}

#[tokio::test]
async fn test_invalid_email_is_rejected_before_the_provider_is_called() {
    let app = TestApp::new();
    app.start().await;

    let err = app
        .state
        .login_form()
        .submit(login("not-an-email", "password123"))
        .await
        .expect_err("validation should fail");

    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test(start_paused = true)]
async fn test_slow_login_completion_never_overwrites_newer_notification() {
    let app = TestApp::new();
    app.seed_account("early@example.com", "pw", "Early", "student");
    app.start().await;

    // The login call resolves slowly...
    app.identity.set_sign_in_delay(Duration::from_millis(500));
    let form = app.state.login_form();
    let submit = tokio::spawn(async move {
        form.submit(login("early@example.com", "pw")).await
    });

    // ...and while it is in flight the provider pushes a newer session
    // (e.g. a sign-in completed in another tab).
    tokio::time::sleep(Duration::from_millis(10)).await;
    let newer = app
        .identity
        .register("late@example.com", "pw", UserMetadata::new("Late", "teacher"));
    let mut rx = app.state.sessions.watch();
    app.identity.push(SessionChange::signed_in(newer.clone()));
    rx.changed().await.expect("state channel closed");

    // The stale completion resolves last; the state must still reflect the
    // notification.
    submit
        .await
        .expect("submit task panicked")
        .expect("login failed");
    let state = app.state.sessions.current();
    assert_eq!(state.identity, Some(newer));
}
