//! Field access helpers for raw webhook payloads.
//!
//! Raw payloads are never validated against a schema; normalizers read the
//! handful of fields they need by dotted path (`"sender.id"`). Required reads
//! fail with [`NormalizeError::FieldAccess`] naming the path that could not be
//! resolved. For optional reads JSON `null` counts as absent; a required
//! pass-through field may be `null` as long as its key exists.
use serde_json::Value;

use crate::error::NormalizeError;

fn walk<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
}

/// Resolve a dotted object path such as `"message.text"`, skipping `null`.
pub(crate) fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    walk(value, path).filter(|found| !found.is_null())
}

/// A field whose key must exist; any JSON value, `null` included.
pub(crate) fn required<'v>(value: &'v Value, path: &str) -> Result<&'v Value, NormalizeError> {
    walk(value, path).ok_or_else(|| NormalizeError::field(path, "present"))
}

/// A field that must be present and a JSON object.
pub(crate) fn required_object<'v>(
    value: &'v Value,
    path: &str,
) -> Result<&'v Value, NormalizeError> {
    lookup(value, path)
        .filter(|found| found.is_object())
        .ok_or_else(|| NormalizeError::field(path, "an object"))
}

/// A field that must be present and a string.
pub(crate) fn required_str<'v>(value: &'v Value, path: &str) -> Result<&'v str, NormalizeError> {
    lookup(value, path)
        .and_then(Value::as_str)
        .ok_or_else(|| NormalizeError::field(path, "a string"))
}

/// A field that may be absent, but must be a string when present.
pub(crate) fn optional_str<'v>(
    value: &'v Value,
    path: &str,
) -> Result<Option<&'v str>, NormalizeError> {
    match lookup(value, path) {
        None => Ok(None),
        Some(found) => found
            .as_str()
            .map(Some)
            .ok_or_else(|| NormalizeError::field(path, "a string")),
    }
}

/// First element of an array field, if the field is a non-empty array whose
/// first element is an object.
pub(crate) fn first_object<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    value
        .get(key)?
        .as_array()?
        .first()
        .filter(|first| first.is_object())
}
