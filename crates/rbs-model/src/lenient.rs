//! Forgiving field deserializers for imported documents.
//!
//! Ruleset files are edited by hand. A leaf of the wrong type falls back to
//! the field's default instead of failing the whole import; numbers and
//! booleans in text fields are kept as their text.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field. Scalars become their text; null, arrays and objects become "".
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// String-backed enum field. Non-scalars become the default variant.
pub(crate) fn from_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(scalar_text(Value::deserialize(deserializer)?)
        .map(T::from)
        .unwrap_or_default())
}

/// Nested record. Anything but an object becomes the default record.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    item(Value::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// List of records. Anything but an array becomes an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(item)
            .collect::<Result<_, _>>()
            .map_err(de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn item<T>(value: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => T::deserialize(value),
        _ => Ok(T::default()),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
