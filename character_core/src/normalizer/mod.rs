//! Normalizer - extracts the six canonical fields from a raw candidate.
//!
//! Newer host records wrap their fields in a nested `data` container; older
//! ones keep the same field names at the record root. The nested path is
//! tried first and the flat path is the fallback. Only `name` decides
//! whether a record is genuine: a record missing secondary fields is still
//! valid, while a record no path can name is malformed.

use host_state::record::{fields, CoreInfo};
use serde_json::Value;
use thiserror::Error;

/// Which field path the canonical fields were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// Fields came from the nested `data` container.
    Nested,

    /// Fields came from the record root (legacy flat shape).
    Flat,
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPath::Nested => write!(f, "nested data container"),
            FieldPath::Flat => write!(f, "flat record"),
        }
    }
}

/// A candidate record was found but no field path yielded a usable name.
/// Carries the candidate's top-level keys for the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("character record has no usable name field (top-level keys: [{}])", .keys.join(", "))]
pub struct MalformedRecord {
    pub keys: Vec<String>,
}

/// Normalize a raw candidate into the canonical summary.
///
/// Returns the extracted fields together with the path that produced them.
/// Fields absent under the chosen path are carried through as `None`;
/// absence of a secondary field is never a failure.
pub fn normalize(candidate: &Value) -> Result<(CoreInfo, FieldPath), MalformedRecord> {
    if let Some(container) = candidate
        .get(fields::NESTED_CONTAINER)
        .filter(|container| container.is_object())
    {
        let info = extract(container);
        if info.has_name() {
            return Ok((info, FieldPath::Nested));
        }
    }

    let info = extract(candidate);
    if info.has_name() {
        return Ok((info, FieldPath::Flat));
    }

    Err(MalformedRecord {
        keys: top_level_keys(candidate),
    })
}

fn extract(source: &Value) -> CoreInfo {
    CoreInfo {
        name: read_text(source, fields::NAME),
        description: read_text(source, fields::DESCRIPTION),
        personality: read_text(source, fields::PERSONALITY),
        scenario: read_text(source, fields::SCENARIO),
        first_message: read_text(source, fields::FIRST_MESSAGE),
        message_example: read_text(source, fields::MESSAGE_EXAMPLE),
    }
}

// Non-string field values are host garbage, not text; they read as absent.
fn read_text(source: &Value, field: &str) -> Option<String> {
    source.get(field).and_then(Value::as_str).map(str::to_owned)
}

fn top_level_keys(candidate: &Value) -> Vec<String> {
    candidate
        .as_object()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}
