//! GUI-specific error types.
//!
//! Every variant is recoverable: the workspace reports it (usually as an
//! error notification) and stays usable. The `Display` text is exactly what
//! the notification banner shows.

use rbs_model::RuleValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // USER INPUT
    // =========================================================================
    /// New ruleset name is blank after trimming.
    #[error("Ruleset name cannot be empty")]
    EmptyRulesetName,

    /// New ruleset name is already a key in the collection.
    #[error("Ruleset name already exists")]
    DuplicateRulesetName { name: String },

    /// A rule in the selected ruleset cannot be exported.
    #[error("Rule validation error: {error}")]
    RuleValidation {
        index: usize,
        error: RuleValidationError,
    },

    // =========================================================================
    // STATE
    // =========================================================================
    /// A rule operation arrived while no ruleset is selected.
    #[error("No ruleset is selected")]
    NoRulesetSelected,

    /// A rule index no longer exists.
    #[error("Rule {index} not found")]
    RuleNotFound { index: usize },

    /// Import or export requested while an import is running.
    #[error("A rules file is still loading")]
    Busy,

    // =========================================================================
    // FILE OPERATIONS
    // =========================================================================
    /// Reading, parsing or shape-checking an import failed.
    #[error("Error loading file: {reason}")]
    Import { reason: String },

    /// Serializing or writing an export failed.
    #[error("Error downloading file: {reason}")]
    Export { reason: String },
}

impl GuiError {
    /// Whether the error is shown to the user, as opposed to only logged.
    ///
    /// State errors come from stale messages (for example a click on a rule
    /// that was just removed) and are dropped silently.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::NoRulesetSelected | Self::RuleNotFound { .. } | Self::Busy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_texts() {
        assert_eq!(
            GuiError::RuleValidation {
                index: 0,
                error: RuleValidationError::MissingField
            }
            .to_string(),
            "Rule validation error: Field is required"
        );
        assert_eq!(
            GuiError::Import {
                reason: "Invalid ruleset structure for \"A\"".to_string()
            }
            .to_string(),
            "Error loading file: Invalid ruleset structure for \"A\""
        );
    }

    #[test]
    fn state_errors_are_silent() {
        assert!(!GuiError::RuleNotFound { index: 3 }.is_user_facing());
        assert!(GuiError::EmptyRulesetName.is_user_facing());
    }
}
