//! Typed parsing of the host's active-index value.
//!
//! The host stores the selection index with no type guarantee: it shows up
//! as a number in some builds and as a numeric string in others. Both forms
//! go through the same coercion here, and every rejection is a distinct,
//! reportable parse failure instead of an ad hoc type check at the call
//! site.

use serde_json::Value;
use thiserror::Error;

/// Why an active-index value could not be coerced to a table index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexParseError {
    /// The value is a string that does not parse as a finite number.
    #[error("index value `{0}` is not numeric")]
    NotNumeric(String),

    /// The value is numeric but not a whole number.
    #[error("index value {0} is not an integer")]
    NotInteger(f64),

    /// The value is a whole number below zero.
    #[error("index value {0} is negative")]
    Negative(f64),

    /// The value is neither a number nor a string.
    #[error("index value has unsupported type `{0}`")]
    UnsupportedType(&'static str),
}

/// Coerce a raw active-index value into a table index.
///
/// Numbers and numeric strings are treated uniformly: both must coerce to
/// a finite, non-negative integer. Anything else is rejected with the
/// specific reason.
pub fn parse_active_index(value: &Value) -> Result<usize, IndexParseError> {
    let numeric = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| IndexParseError::NotNumeric(n.to_string()))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| IndexParseError::NotNumeric(s.clone()))?,
        other => return Err(IndexParseError::UnsupportedType(value_kind(other))),
    };

    // String parsing accepts "NaN" and "inf"; neither names a table slot.
    if !numeric.is_finite() {
        return Err(IndexParseError::NotNumeric(numeric.to_string()));
    }
    if numeric.fract() != 0.0 {
        return Err(IndexParseError::NotInteger(numeric));
    }
    if numeric < 0.0 {
        return Err(IndexParseError::Negative(numeric));
    }

    Ok(numeric as usize)
}

/// Human-readable JSON type name, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_index() {
        assert_eq!(parse_active_index(&json!(0)), Ok(0));
        assert_eq!(parse_active_index(&json!(4)), Ok(4));
    }

    #[test]
    fn test_string_index_coercion() {
        assert_eq!(parse_active_index(&json!("2")), Ok(2));
        assert_eq!(parse_active_index(&json!(" 13 ")), Ok(13));
    }

    #[test]
    fn test_number_and_string_coerce_identically() {
        assert_eq!(parse_active_index(&json!(3)), parse_active_index(&json!("3")));
        assert_eq!(
            parse_active_index(&json!(2.5)),
            parse_active_index(&json!("2.5"))
        );
    }

    #[test]
    fn test_non_numeric_string() {
        assert_eq!(
            parse_active_index(&json!("default")),
            Err(IndexParseError::NotNumeric("default".into()))
        );
        assert!(matches!(
            parse_active_index(&json!("")),
            Err(IndexParseError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_non_finite_string() {
        assert!(matches!(
            parse_active_index(&json!("NaN")),
            Err(IndexParseError::NotNumeric(_))
        ));
        assert!(matches!(
            parse_active_index(&json!("inf")),
            Err(IndexParseError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_fractional_index() {
        assert_eq!(
            parse_active_index(&json!(1.5)),
            Err(IndexParseError::NotInteger(1.5))
        );
    }

    #[test]
    fn test_negative_index() {
        assert_eq!(
            parse_active_index(&json!(-1)),
            Err(IndexParseError::Negative(-1.0))
        );
        assert_eq!(
            parse_active_index(&json!("-3")),
            Err(IndexParseError::Negative(-3.0))
        );
    }

    #[test]
    fn test_unsupported_types() {
        assert_eq!(
            parse_active_index(&json!(true)),
            Err(IndexParseError::UnsupportedType("boolean"))
        );
        assert_eq!(
            parse_active_index(&json!({"id": 2})),
            Err(IndexParseError::UnsupportedType("object"))
        );
    }
}
