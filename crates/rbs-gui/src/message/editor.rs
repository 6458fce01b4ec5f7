//! Rule and condition editor messages.
//!
//! Editors own no state: every message is applied to the record that was
//! rendered, producing a replacement record for the owner to store.

use rbs_model::{ActionType, ErrorType};

/// Messages emitted by one condition editor.
#[derive(Debug, Clone)]
pub enum ConditionMessage {
    ExpressionChanged(String),
    CodeChanged(String),
    ErrorTypeSelected(ErrorType),
    MessageChanged(String),
    ActionTypeSelected(ActionType),
    ActionValueChanged(String),
    /// Ask the owning rule to remove this condition.
    DeleteClicked,
}

/// Messages emitted by one rule editor.
#[derive(Debug, Clone)]
pub enum RuleMessage {
    FieldChanged(String),
    AddConditionClicked,
    /// Message from the condition editor at the given index.
    Condition(usize, ConditionMessage),
    /// Ask the workspace to remove this rule.
    DeleteClicked,
}
