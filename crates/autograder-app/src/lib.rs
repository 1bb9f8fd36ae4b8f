//! # autograder-app
//!
//! Application shell for the AutoGrader client: the route table, the
//! navigator applying the route guard per navigation, the auth form
//! controllers, and the dashboard view models. Rendering is out of scope —
//! every type here is presentation-free data.

pub mod forms;
pub mod nav;
pub mod routes;
pub mod state;
pub mod views;

pub use nav::{NavOutcome, Navigator};
pub use routes::Route;
pub use state::AppState;
