//! Mapping from upstream JSON objects to [`UserRecord`]
//!
//! The upstream payload is treated as an untyped tree. Fields are pulled out
//! with [`lookup`], which yields `None` whenever a path segment is missing or
//! is not an object, so malformed nested data degrades to a fallback instead
//! of failing the whole record.

use crate::error::{Error, Result};
use crate::types::{NOT_AVAILABLE, UserId, UserRecord};
use serde_json::Value;

/// Follow `path` through nested objects
///
/// Returns `None` if any segment is absent, if an intermediate value is not
/// an object, or if the final value is `null`.
///
/// # Examples
///
/// ```
/// use portable_report::mapper::lookup;
/// use serde_json::json;
///
/// let user = json!({"company": {"name": "Acme"}, "address": "unknown"});
/// assert_eq!(lookup(&user, &["company", "name"]), Some(&json!("Acme")));
/// assert_eq!(lookup(&user, &["address", "city"]), None);
/// ```
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for segment in path {
        current = current.as_object()?.get(*segment)?;
    }
    (!current.is_null()).then_some(current)
}

/// Text form of a field: strings verbatim, other values as JSON text
fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    lookup(value, path).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Convert one decoded JSON element into a [`UserRecord`]
///
/// Missing top-level fields become `None`; missing `company.name` or
/// `address.city` become [`NOT_AVAILABLE`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if `value` is not a JSON object.
pub fn map_user(value: &Value) -> Result<UserRecord> {
    if !value.is_object() {
        return Err(Error::parse(format!(
            "invalid data structure: expected a JSON object, got {}",
            json_type(value)
        )));
    }

    Ok(UserRecord {
        id: lookup(value, &["id"]).map(|v| match v {
            Value::Number(n) => UserId::Number(n.clone()),
            Value::String(s) => UserId::Text(s.clone()),
            other => UserId::Text(other.to_string()),
        }),
        name: text_at(value, &["name"]),
        username: text_at(value, &["username"]),
        email: text_at(value, &["email"]),
        company_name: text_at(value, &["company", "name"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        city: text_at(value, &["address", "city"]).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}

/// Short name of a JSON value's type, for error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
