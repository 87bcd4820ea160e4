//! Snapshot of the host's exposed character state.
//!
//! The host surfaces three pieces of mutable global state: an optional
//! direct reference to the active character, an active-index value of
//! unreliable type, and the character table. [`HostSnapshot`] copies all
//! three into an owned, immutable value exactly once per invocation, so
//! the resolution core never touches ambient host state directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Host context key for the direct active-character reference.
pub const CHARACTER_KEY: &str = "character";

/// Host context key for the active-index value.
pub const ACTIVE_INDEX_KEY: &str = "characterId";

/// Host context key for the character table.
pub const CHARACTER_TABLE_KEY: &str = "characters";

/// An owned, immutable copy of the host state relevant to character
/// resolution, taken at call time.
///
/// All three fields are kept as raw [`Value`]s: the host makes no type
/// guarantees, and classifying the shapes is the resolver's job, not the
/// snapshot's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HostSnapshot {
    /// Direct reference to the active character, when the host exposes one.
    character: Option<Value>,

    /// The active-index value: absent, a number, or a numeric-looking string.
    active_index: Option<Value>,

    /// The character table; possibly absent or not an array at all.
    character_table: Option<Value>,
}

impl HostSnapshot {
    /// Create a snapshot with no host state at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture a snapshot from a raw host context object.
    ///
    /// Returns `None` when the context handle itself is absent or null;
    /// the caller maps that to its context-unavailable outcome. Null
    /// values under the known keys are treated the same as absent keys.
    pub fn capture(context: Option<&Value>) -> Option<Self> {
        let context = context.filter(|ctx| !ctx.is_null())?;
        Some(Self {
            character: read_key(context, CHARACTER_KEY),
            active_index: read_key(context, ACTIVE_INDEX_KEY),
            character_table: read_key(context, CHARACTER_TABLE_KEY),
        })
    }

    /// Set the direct character reference.
    pub fn with_character(mut self, character: Value) -> Self {
        self.character = Some(character);
        self
    }

    /// Set the active-index value.
    pub fn with_active_index(mut self, index: Value) -> Self {
        self.active_index = Some(index);
        self
    }

    /// Set the character table.
    pub fn with_character_table(mut self, table: Value) -> Self {
        self.character_table = Some(table);
        self
    }

    /// The direct active-character reference, if the host exposed a
    /// non-null one.
    pub fn character(&self) -> Option<&Value> {
        self.character.as_ref().filter(|v| !v.is_null())
    }

    /// The raw active-index value, if present and non-null.
    pub fn active_index(&self) -> Option<&Value> {
        self.active_index.as_ref().filter(|v| !v.is_null())
    }

    /// The character table entries, when the host exposed an actual array.
    pub fn character_table(&self) -> Option<&[Value]> {
        self.character_table
            .as_ref()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// Length of the character table; an absent or non-array table counts
    /// as empty.
    pub fn table_len(&self) -> usize {
        self.character_table().map_or(0, <[Value]>::len)
    }
}

fn read_key(context: &Value, key: &str) -> Option<Value> {
    context.get(key).filter(|v| !v.is_null()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capture_copies_known_keys() {
        let context = json!({
            "character": {"name": "Alice"},
            "characterId": "2",
            "characters": [{"name": "A"}, {"name": "B"}],
            "unrelated": true,
        });

        let snapshot = HostSnapshot::capture(Some(&context)).unwrap();
        assert_eq!(snapshot.character(), Some(&json!({"name": "Alice"})));
        assert_eq!(snapshot.active_index(), Some(&json!("2")));
        assert_eq!(snapshot.table_len(), 2);
    }

    #[test]
    fn test_capture_without_context() {
        assert!(HostSnapshot::capture(None).is_none());
        assert!(HostSnapshot::capture(Some(&Value::Null)).is_none());
    }

    #[test]
    fn test_capture_treats_null_keys_as_absent() {
        let context = json!({"character": null, "characterId": null});
        let snapshot = HostSnapshot::capture(Some(&context)).unwrap();
        assert!(snapshot.character().is_none());
        assert!(snapshot.active_index().is_none());
    }

    #[test]
    fn test_snapshot_is_detached_from_context() {
        let mut context = json!({"character": {"name": "Alice"}});
        let snapshot = HostSnapshot::capture(Some(&context)).unwrap();

        context["character"]["name"] = json!("Mallory");
        assert_eq!(snapshot.character(), Some(&json!({"name": "Alice"})));
    }

    #[test]
    fn test_non_array_table_counts_as_empty() {
        let snapshot = HostSnapshot::empty().with_character_table(json!({"0": "not a list"}));
        assert!(snapshot.character_table().is_none());
        assert_eq!(snapshot.table_len(), 0);
    }

    #[test]
    fn test_builder_round_trip() {
        let snapshot = HostSnapshot::empty()
            .with_active_index(json!(1))
            .with_character_table(json!([{"name": "A"}, {"name": "B"}]));

        assert!(snapshot.character().is_none());
        assert_eq!(snapshot.active_index(), Some(&json!(1)));
        assert_eq!(snapshot.character_table().unwrap().len(), 2);
    }
}
