//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognized by the AutoGrader platform.
///
/// The role gates which dashboard an identity may open. An identity whose
/// metadata carries no recognizable role is unassigned and fails every
/// role-gated check while still counting as logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A learner; may open the student dashboard.
    Student,
    /// An instructor; may open the teacher dashboard.
    Teacher,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }

    /// Leniently parse a raw metadata value into a typed role.
    ///
    /// Unknown or missing values map to `None` (unassigned) rather than an
    /// error — the provider boundary is the only place this runs.
    pub fn parse_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = autograder_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(autograder_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, teacher"
            ))),
        }
    }
}
