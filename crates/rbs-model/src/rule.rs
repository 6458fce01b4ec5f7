//! Rules, rulesets and the named collection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::condition::Condition;
use crate::lenient;

/// A field name plus the ordered conditions checked against it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// Data field the rule governs. Required for export, not for editing.
    #[serde(deserialize_with = "lenient::text")]
    pub field: String,
    #[serde(deserialize_with = "lenient::list")]
    pub conditions: Vec<Condition>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Rule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper used by tests and fixtures.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

/// Unit of grouping for import and export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    #[serde(deserialize_with = "lenient::list")]
    pub rules: Vec<Rule>,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Ruleset {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            extra: Map::new(),
        }
    }
}

/// Rulesets keyed by unique name, in insertion (or import) order.
pub type RulesetCollection = IndexMap<String, Ruleset>;
