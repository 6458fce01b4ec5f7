use thiserror::Error;

/// Reason a rule cannot be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleValidationError {
    #[error("Field is required")]
    MissingField,
    #[error("At least one condition is required")]
    NoConditions,
}
