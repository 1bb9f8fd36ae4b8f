//! Auth form controllers.
//!
//! Each controller validates its input, issues the corresponding
//! identity-provider call, and reports a navigation outcome or a blocking
//! notice. Provider failures surface directly to the caller and are never
//! retried automatically.

pub mod login;
pub mod password;
pub mod signup;

pub use login::{LoginForm, LoginOutcome, LoginRequest};
pub use password::{
    ForgotPasswordForm, ForgotPasswordRequest, ResetPasswordForm, ResetPasswordRequest,
};
pub use signup::{SignupForm, SignupOutcome, SignupRequest};

use autograder_core::error::AppError;

/// Collapse `validator` errors into the unified error type.
fn validation_error(errors: validator::ValidationErrors) -> AppError {
    AppError::validation(errors.to_string())
}
