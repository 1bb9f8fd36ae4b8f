//! Profile row models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The role-specific tables in the external relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTable {
    /// The `students` table.
    Students,
    /// The `teachers` table.
    Teachers,
}

impl ProfileTable {
    /// The table name as used by the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Teachers => "teachers",
        }
    }
}

impl fmt::Display for ProfileTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A new row for the `students` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudentProfile {
    /// Display identifier derived from the identity id, e.g. `STU-1a2b3c4d`.
    pub student_id: String,
    /// Full name collected at sign-up.
    pub full_name: String,
    /// Email the account was registered with.
    pub email: String,
}

impl NewStudentProfile {
    /// Build the row for a freshly created identity.
    pub fn for_identity(id: Uuid, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            student_id: format!("STU-{}", short_id(id)),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}

/// A new row for the `teachers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeacherProfile {
    /// Display identifier derived from the identity id, e.g. `TEA-1a2b3c4d`.
    pub teacher_id: String,
    /// Full name collected at sign-up.
    pub full_name: String,
    /// Email the account was registered with.
    pub email: String,
}

impl NewTeacherProfile {
    /// Build the row for a freshly created identity.
    pub fn for_identity(id: Uuid, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            teacher_id: format!("TEA-{}", short_id(id)),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}

/// A new profile row together with its destination table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewProfile {
    /// A student row.
    Student(NewStudentProfile),
    /// A teacher row.
    Teacher(NewTeacherProfile),
}

impl NewProfile {
    /// The table this row belongs in.
    pub fn table(&self) -> ProfileTable {
        match self {
            Self::Student(_) => ProfileTable::Students,
            Self::Teacher(_) => ProfileTable::Teachers,
        }
    }
}

/// First eight characters of the canonical hyphenated id.
fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_format() {
        let id = Uuid::parse_str("1a2b3c4d-0000-0000-0000-000000000000").unwrap();
        let row = NewStudentProfile::for_identity(id, "Sam Carter", "sam@example.com");
        assert_eq!(row.student_id, "STU-1a2b3c4d");
    }

    #[test]
    fn test_profile_table_routing() {
        let id = Uuid::new_v4();
        let student = NewProfile::Student(NewStudentProfile::for_identity(id, "S", "s@x.com"));
        let teacher = NewProfile::Teacher(NewTeacherProfile::for_identity(id, "T", "t@x.com"));
        assert_eq!(student.table(), ProfileTable::Students);
        assert_eq!(teacher.table().as_str(), "teachers");
    }
}
