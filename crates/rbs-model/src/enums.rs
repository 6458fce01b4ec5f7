//! Enumerations carried inside conditions.
//!
//! Both enums are stored as plain strings in ruleset documents. Values this
//! tool does not know are kept verbatim in an `Other` variant so that an
//! imported document exports unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity attached to a condition's error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorType {
    #[default]
    Warning,
    Error,
    Fatal,
    /// Value found in an imported document that is not one of the above.
    Other(String),
}

impl ErrorType {
    /// Choices offered by the condition editor.
    pub const ALL: [Self; 3] = [Self::Warning, Self::Error, Self::Fatal];

    /// Value as written in ruleset documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ErrorType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "warning" => Self::Warning,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ErrorType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ErrorType> for String {
    fn from(value: ErrorType) -> Self {
        match value {
            ErrorType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Corrective action applied to a field's value.
///
/// The empty string on the wire means "no action".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    #[default]
    None,
    Set,
    Remove,
    Append,
    Prepend,
    /// Value found in an imported document that is not one of the above.
    Other(String),
}

impl ActionType {
    /// Choices offered by the condition editor, "None" first.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Set,
        Self::Remove,
        Self::Append,
        Self::Prepend,
    ];

    /// Value as written in ruleset documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Set => "set",
            Self::Remove => "remove",
            Self::Append => "append",
            Self::Prepend => "prepend",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Set => "Set",
            Self::Remove => "Remove",
            Self::Append => "Append",
            Self::Prepend => "Prepend",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ActionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Self::None,
            "set" => Self::Set,
            "remove" => Self::Remove,
            "append" => Self::Append,
            "prepend" => Self::Prepend,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ActionType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ActionType> for String {
    fn from(value: ActionType) -> Self {
        match value {
            ActionType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_type_wire_values() {
        assert_eq!(ErrorType::from("fatal"), ErrorType::Fatal);
        assert_eq!(ErrorType::default().as_str(), "warning");
        assert_eq!(
            ErrorType::from("critical"),
            ErrorType::Other("critical".to_string())
        );
    }

    #[test]
    fn action_type_empty_is_none() {
        assert_eq!(ActionType::from(""), ActionType::None);
        assert_eq!(ActionType::default(), ActionType::None);
        assert_eq!(ActionType::None.label(), "None");
        assert_eq!(String::from(ActionType::Prepend), "prepend");
    }

    #[test]
    fn unknown_values_keep_their_spelling() {
        let raw = String::from(ActionType::from("Uppercase"));
        assert_eq!(raw, "Uppercase");
    }
}
