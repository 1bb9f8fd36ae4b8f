//! Integration tests for the signup flow.

mod common;

use autograder_app::forms::{LoginRequest, SignupRequest};
use autograder_app::routes::Route;
use autograder_core::error::{AppError, ErrorKind};
use autograder_entity::profile::NewProfile;
use autograder_entity::user::Role;

use common::TestApp;

fn signup(name: &str, email: &str, role: Role) -> SignupRequest {
    SignupRequest {
        full_name: name.to_string(),
        email: email.to_string(),
        password: "xK9#mQ2v!Tz7Lp".to_string(),
        role,
    }
}

#[tokio::test]
async fn test_signup_writes_the_role_specific_profile_row() {
    let app = TestApp::new();
    app.start().await;

    let outcome = app
        .state
        .signup_form()
        .submit(signup("Sam Carter", "sam@example.com", Role::Student))
        .await
        .expect("signup failed");

    assert_eq!(outcome.notice, "Signup successful! Please login.");
    assert_eq!(outcome.next, Route::Login);

    let rows = app.profiles.rows();
    assert_eq!(rows.len(), 1);
    match &rows[0] {
        NewProfile::Student(row) => {
            assert!(row.student_id.starts_with("STU-"));
            assert_eq!(row.student_id.len(), "STU-".len() + 8);
            assert_eq!(row.full_name, "Sam Carter");
            assert_eq!(row.email, "sam@example.com");
        }
        other => panic!("expected a student row, got {other:?}"),
    }
}

#[tokio::test]
async fn test_teacher_signup_targets_the_teachers_table() {
    let app = TestApp::new();
    app.start().await;

    app.state
        .signup_form()
        .submit(signup("Ada Lovelace", "ada@example.com", Role::Teacher))
        .await
        .expect("signup failed");

    let rows = app.profiles.rows();
    assert!(matches!(&rows[0], NewProfile::Teacher(row) if row.teacher_id.starts_with("TEA-")));
}

#[tokio::test]
async fn test_failed_profile_insert_is_swallowed_and_identity_remains_usable() {
    // Documents the current (flawed) contract: the profile insert is
    // best-effort with no compensating action, so a failure leaves an
    // identity with no profile row — and that identity can still log in.
    let app = TestApp::new();
    app.start().await;
    app.profiles
        .fail_next(AppError::profile_write("students insert rejected"));

    let outcome = app
        .state
        .signup_form()
        .submit(signup("Sam Carter", "sam@example.com", Role::Student))
        .await
        .expect("signup must not surface the insert failure");

    assert_eq!(outcome.next, Route::Login);
    assert!(app.profiles.rows().is_empty());

    // The identity exists and login works despite the missing row.
    let login = app
        .state
        .login_form()
        .submit(LoginRequest {
            email: "sam@example.com".to_string(),
            password: "xK9#mQ2v!Tz7Lp".to_string(),
        })
        .await
        .expect("login failed");
    assert_eq!(
        login,
        autograder_app::forms::LoginOutcome::Dashboard(Route::DashboardStudent)
    );
}

#[tokio::test]
async fn test_rejected_signup_surfaces_as_provider_error_and_skips_the_insert() {
    let app = TestApp::new();
    app.start().await;
    app.identity
        .fail_next_sign_up(AppError::provider("User already registered"));

    let err = app
        .state
        .signup_form()
        .submit(signup("Sam Carter", "sam@example.com", Role::Student))
        .await
        .expect_err("signup should fail");

    assert_eq!(err.kind, ErrorKind::Provider);
    assert!(app.profiles.rows().is_empty());
}

#[tokio::test]
async fn test_weak_password_is_rejected_before_the_provider_is_called() {
    let app = TestApp::new();
    app.start().await;

    let mut request = signup("Sam Carter", "sam@example.com", Role::Student);
    request.password = "password1".to_string();

    let err = app
        .state
        .signup_form()
        .submit(request)
        .await
        .expect_err("weak password should fail");

    assert_eq!(err.kind, ErrorKind::Validation);
}
