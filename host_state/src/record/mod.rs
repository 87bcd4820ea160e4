//! The canonical character record produced by normalization.

use serde::{Deserialize, Serialize};

/// Host field names for the six canonical text fields, plus the key of the
/// nested field container newer records wrap them in.
pub mod fields {
    pub const NESTED_CONTAINER: &str = "data";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PERSONALITY: &str = "personality";
    pub const SCENARIO: &str = "scenario";
    pub const FIRST_MESSAGE: &str = "first_mes";
    pub const MESSAGE_EXAMPLE: &str = "mes_example";
}

/// Fallback shown in place of a missing or empty name.
pub const UNKNOWN_NAME: &str = "(unknown name)";

/// The normalized six-field summary of a character record.
///
/// Every field is optional: a record missing secondary fields is still a
/// valid character. Only `name` is load-bearing, and the normalizer refuses
/// to produce a `CoreInfo` without a usable one. Values are ephemeral and
/// recomputed on every invocation; nothing here is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoreInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<String>,
    pub scenario: Option<String>,
    #[serde(rename = "first_mes")]
    pub first_message: Option<String>,
    #[serde(rename = "mes_example")]
    pub message_example: Option<String>,
}

impl CoreInfo {
    /// Create a record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the record carries a usable (non-empty) name.
    pub fn has_name(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// The name to show in user-facing text, with a fallback for records
    /// that somehow lack one.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_NAME,
        }
    }

    /// Whether all six fields are absent.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.personality.is_none()
            && self.scenario.is_none()
            && self.first_message.is_none()
            && self.message_example.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_record() {
        let info = CoreInfo::named("Alice");
        assert!(info.has_name());
        assert_eq!(info.display_name(), "Alice");
        assert!(info.description.is_none());
    }

    #[test]
    fn test_blank_name_is_not_usable() {
        let info = CoreInfo::named("   ");
        assert!(!info.has_name());
        assert_eq!(info.display_name(), UNKNOWN_NAME);
    }

    #[test]
    fn test_empty_record() {
        let info = CoreInfo::default();
        assert!(info.is_empty());
        assert_eq!(info.display_name(), UNKNOWN_NAME);

        let info = CoreInfo {
            scenario: Some("A tavern".into()),
            ..CoreInfo::default()
        };
        assert!(!info.is_empty());
    }

    #[test]
    fn test_serializes_with_host_field_names() {
        let info = CoreInfo {
            name: Some("Alice".into()),
            first_message: Some("Hello".into()),
            ..CoreInfo::default()
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["first_mes"], "Hello");
        assert_eq!(value["name"], "Alice");
    }
}
