//! Condition records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{ActionType, ErrorType};
use crate::lenient;

/// One check expression plus the error it raises and an optional action.
///
/// `Condition::default()` is the record the rule editor appends:
/// empty expression, a `warning` error message and no action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    /// Free-text expression. Never parsed or evaluated by this tool.
    #[serde(deserialize_with = "lenient::text")]
    pub condition: String,
    #[serde(deserialize_with = "lenient::record")]
    pub error_message: ErrorMessage,
    #[serde(deserialize_with = "lenient::record")]
    pub action: Action,
    /// Properties this tool does not edit, kept for export.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Condition {
    /// Create a condition with the given expression and default descriptors.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            condition: expression.into(),
            ..Default::default()
        }
    }
}

/// Error descriptor reported when a condition fails.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    #[serde(deserialize_with = "lenient::text")]
    pub code: String,
    #[serde(deserialize_with = "lenient::from_text")]
    pub error_type: ErrorType,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl ErrorMessage {
    pub fn new(
        code: impl Into<String>,
        error_type: ErrorType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            error_type,
            message: message.into(),
            extra: Map::new(),
        }
    }
}

/// Corrective action: `type` selects the transform, `value` is its operand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(rename = "type", deserialize_with = "lenient::from_text")]
    pub action_type: ActionType,
    #[serde(deserialize_with = "lenient::text")]
    pub value: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Action {
    pub fn new(action_type: ActionType, value: impl Into<String>) -> Self {
        Self {
            action_type,
            value: value.into(),
            extra: Map::new(),
        }
    }
}
