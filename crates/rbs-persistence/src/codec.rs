//! Conversion between document text and [`RulesetCollection`].

use rbs_model::RulesetCollection;
use serde_json::Value;

use crate::error::{PersistenceError, Result};

/// Serialize a collection as pretty-printed JSON (two-space indent).
pub fn to_json_string(collection: &RulesetCollection) -> Result<String> {
    serde_json::to_string_pretty(collection)
        .map_err(|source| PersistenceError::Serialization { source })
}

/// Parse document text into a collection.
///
/// Every top-level value must carry an array-typed `rules` property; the
/// first offending key (in document order) is named in the error. Deeper
/// fields fall back to their defaults when missing or of the wrong type.
pub fn parse_collection(text: &str) -> Result<RulesetCollection> {
    let document: Value =
        serde_json::from_str(text).map_err(|source| PersistenceError::Parse { source })?;

    let Value::Object(entries) = document else {
        return Err(PersistenceError::NotAnObject);
    };

    if let Some(key) = entries
        .iter()
        .find(|(_, ruleset)| !ruleset.get("rules").is_some_and(Value::is_array))
        .map(|(key, _)| key.clone())
    {
        return Err(PersistenceError::InvalidStructure { key });
    }

    serde_json::from_value(Value::Object(entries))
        .map_err(|source| PersistenceError::Parse { source })
}
