//! JSON argument parsing and validation helpers for capability handlers.
//!
//! Failures name the offending field. Out-of-range values are rejected, never
//! clamped, so the caller learns about the mistake instead of silently getting
//! different behavior.
//!
//! ```rust
//! use mcapability::{parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"author_handle":"alice"}"#).expect("object should parse");
//! let handle = required_string(&args, "author_handle").expect("handle should be present");
//! assert_eq!(handle, "alice");
//! ```

use serde_json::{Map, Value};

use crate::CapabilityError;

pub fn parse_json_value(args_json: &str) -> Result<Value, CapabilityError> {
    serde_json::from_str(args_json)
        .map_err(|err| CapabilityError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, CapabilityError> {
    let value = parse_json_value(args_json)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| CapabilityError::invalid_arguments("expected JSON object arguments"))
}

/// Requires a string argument with non-whitespace content. The value itself is
/// passed through untouched; in particular a leading `@` is not stripped.
pub fn required_string(args: &Map<String, Value>, key: &str) -> Result<String, CapabilityError> {
    match args.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
        Some(Value::String(_)) => Err(CapabilityError::invalid_field(
            key,
            "must be a non-empty string",
        )),
        Some(_) => Err(CapabilityError::invalid_field(key, "must be a string")),
        None => Err(CapabilityError::invalid_field(
            key,
            "is required and was not provided",
        )),
    }
}

/// An optional string argument; absent or `null` yields `None`.
pub fn optional_string(
    args: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, CapabilityError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(CapabilityError::invalid_field(key, "must be a string")),
    }
}

/// An optional integer argument with inclusive bounds; absent or `null` yields
/// `None`. Fractional numbers are rejected.
pub fn optional_integer_in_range(
    args: &Map<String, Value>,
    key: &str,
    min: i64,
    max: i64,
) -> Result<Option<i64>, CapabilityError> {
    let value = match args.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let number = value.as_i64().ok_or_else(|| {
        CapabilityError::invalid_field(key, format!("must be an integer between {min} and {max}"))
    })?;

    if number < min || number > max {
        return Err(CapabilityError::invalid_field(
            key,
            format!("must be between {min} and {max}, got {number}"),
        ));
    }

    Ok(Some(number))
}
