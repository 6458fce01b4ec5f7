//! Export-time rule checks.
//!
//! The model allows incomplete rules while editing; these checks run only
//! when a collection is about to be written out.

use crate::error::RuleValidationError;
use crate::rule::Rule;

/// A failed rule and its position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleIssue {
    pub index: usize,
    pub error: RuleValidationError,
}

/// Check a single rule. The field check comes first.
pub fn validate_rule(rule: &Rule) -> Result<(), RuleValidationError> {
    if rule.field.is_empty() {
        return Err(RuleValidationError::MissingField);
    }
    if rule.conditions.is_empty() {
        return Err(RuleValidationError::NoConditions);
    }
    Ok(())
}

/// Check every rule and collect all failures in list order.
///
/// An empty result means the list may be exported.
pub fn validate_rules(rules: &[Rule]) -> Vec<RuleIssue> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(index, rule)| {
            validate_rule(rule)
                .err()
                .map(|error| RuleIssue { index, error })
        })
        .collect()
}
