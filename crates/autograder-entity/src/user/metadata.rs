//! Raw user metadata as reported by the identity provider.

use serde::{Deserialize, Serialize};

/// The metadata bag attached to an identity at sign-up time.
///
/// The provider stores this as an arbitrary mapping; the fields the client
/// cares about are lifted out and everything else is preserved untouched in
/// `extra` so round-trips never lose data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// The person's full name, collected at sign-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// The raw role value. Typed interpretation happens once, at the
    /// provider boundary — never at call sites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any remaining metadata fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserMetadata {
    /// Metadata for a fresh sign-up.
    pub fn new(full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            role: Some(role.into()),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_preserved() {
        let raw = serde_json::json!({
            "full_name": "Ada Lovelace",
            "role": "teacher",
            "avatar_url": "https://example.com/a.png",
        });
        let meta: UserMetadata = serde_json::from_value(raw).unwrap();
        assert_eq!(meta.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(meta.role.as_deref(), Some("teacher"));
        assert!(meta.extra.contains_key("avatar_url"));
    }
}
