//! Denormalized profile rows written to the external store after sign-up.

pub mod model;

pub use model::{NewProfile, NewStudentProfile, NewTeacherProfile, ProfileTable};
