//! # autograder-entity
//!
//! Domain models for the AutoGrader client. Every struct in this crate
//! represents a value reported by the external identity provider or a
//! client-held domain value object. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod profile;
pub mod session;
pub mod user;
