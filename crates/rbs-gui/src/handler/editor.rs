//! Update logic for the rule and condition editors.
//!
//! Each function takes the record as rendered plus one editor message and
//! returns an [`EditorEvent`]: either the replacement record (equal to the
//! input except for the edited part) or a request to delete the record. The
//! editors never remove themselves; the owner decides.

use rbs_model::{Condition, Rule};

use crate::message::{ConditionMessage, RuleMessage};

/// Outcome of applying an editor message.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent<T> {
    /// Replacement record for the owner to store.
    Updated(T),
    /// The user asked to remove this record.
    DeleteRequested,
}

/// Apply a condition editor message.
///
/// Nested descriptors are shallow-merged: editing the error code keeps the
/// error type and message (and any foreign properties) as they were.
pub fn update_condition(condition: &Condition, msg: ConditionMessage) -> EditorEvent<Condition> {
    let mut next = condition.clone();
    match msg {
        ConditionMessage::ExpressionChanged(expression) => next.condition = expression,
        ConditionMessage::CodeChanged(code) => next.error_message.code = code,
        ConditionMessage::ErrorTypeSelected(error_type) => {
            next.error_message.error_type = error_type;
        }
        ConditionMessage::MessageChanged(message) => next.error_message.message = message,
        ConditionMessage::ActionTypeSelected(action_type) => next.action.action_type = action_type,
        ConditionMessage::ActionValueChanged(value) => next.action.value = value,
        ConditionMessage::DeleteClicked => return EditorEvent::DeleteRequested,
    }
    EditorEvent::Updated(next)
}

/// Apply a rule editor message.
///
/// Condition indices that are out of range leave the rule unchanged.
pub fn update_rule(rule: &Rule, msg: RuleMessage) -> EditorEvent<Rule> {
    let mut next = rule.clone();
    match msg {
        RuleMessage::FieldChanged(field) => next.field = field,
        RuleMessage::AddConditionClicked => next.conditions.push(Condition::default()),
        RuleMessage::Condition(index, condition_msg) => {
            let Some(condition) = rule.conditions.get(index) else {
                tracing::warn!(index, "Condition index out of range");
                return EditorEvent::Updated(next);
            };
            match update_condition(condition, condition_msg) {
                EditorEvent::Updated(updated) => next.conditions[index] = updated,
                EditorEvent::DeleteRequested => {
                    next.conditions.remove(index);
                }
            }
        }
        RuleMessage::DeleteClicked => return EditorEvent::DeleteRequested,
    }
    EditorEvent::Updated(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbs_model::{Action, ActionType, ErrorMessage, ErrorType};

    fn updated<T>(event: EditorEvent<T>) -> T {
        match event {
            EditorEvent::Updated(value) => value,
            EditorEvent::DeleteRequested => panic!("expected an update"),
        }
    }

    fn sample_condition() -> Condition {
        Condition {
            condition: "amount > 0".to_string(),
            error_message: ErrorMessage::new("E1", ErrorType::Error, "must be positive"),
            action: Action::new(ActionType::Set, "0"),
            ..Default::default()
        }
    }

    #[test]
    fn error_field_edit_merges_into_descriptor() {
        let original = sample_condition();
        let next = updated(update_condition(
            &original,
            ConditionMessage::CodeChanged("E2".to_string()),
        ));

        assert_eq!(next.error_message.code, "E2");
        assert_eq!(next.error_message.error_type, ErrorType::Error);
        assert_eq!(next.error_message.message, "must be positive");
        assert_eq!(next.action, original.action);
        assert_eq!(original.error_message.code, "E1");
    }

    #[test]
    fn action_edits() {
        let next = updated(update_condition(
            &sample_condition(),
            ConditionMessage::ActionTypeSelected(ActionType::None),
        ));
        assert_eq!(next.action.action_type, ActionType::None);
        assert_eq!(next.action.value, "0");

        let next = updated(update_condition(
            &next,
            ConditionMessage::ActionValueChanged(String::new()),
        ));
        assert_eq!(next.action, Action::default());
    }

    #[test]
    fn free_text_accepts_empty() {
        let next = updated(update_condition(
            &sample_condition(),
            ConditionMessage::ExpressionChanged(String::new()),
        ));
        assert_eq!(next.condition, "");
    }

    #[test]
    fn condition_delete_is_a_request() {
        assert_eq!(
            update_condition(&sample_condition(), ConditionMessage::DeleteClicked),
            EditorEvent::DeleteRequested
        );
    }

    #[test]
    fn add_condition_appends_default() {
        let rule = Rule::new("amount").with_condition(sample_condition());
        let next = updated(update_rule(&rule, RuleMessage::AddConditionClicked));

        assert_eq!(next.conditions.len(), 2);
        assert_eq!(next.conditions[0], sample_condition());
        assert_eq!(next.conditions[1], Condition::default());
    }

    #[test]
    fn condition_update_replaces_only_its_index() {
        let rule = Rule::new("amount")
            .with_condition(Condition::new("a"))
            .with_condition(Condition::new("b"))
            .with_condition(Condition::new("c"));
        let next = updated(update_rule(
            &rule,
            RuleMessage::Condition(1, ConditionMessage::ExpressionChanged("B".to_string())),
        ));

        let expressions: Vec<&str> = next.conditions.iter().map(|c| c.condition.as_str()).collect();
        assert_eq!(expressions, ["a", "B", "c"]);
    }

    #[test]
    fn condition_delete_shifts_later_conditions() {
        let rule = Rule::new("amount")
            .with_condition(Condition::new("a"))
            .with_condition(Condition::new("b"))
            .with_condition(Condition::new("c"));
        let next = updated(update_rule(
            &rule,
            RuleMessage::Condition(0, ConditionMessage::DeleteClicked),
        ));

        let expressions: Vec<&str> = next.conditions.iter().map(|c| c.condition.as_str()).collect();
        assert_eq!(expressions, ["b", "c"]);
    }

    #[test]
    fn out_of_range_condition_is_ignored() {
        let rule = Rule::new("amount").with_condition(Condition::new("a"));
        let next = updated(update_rule(
            &rule,
            RuleMessage::Condition(5, ConditionMessage::DeleteClicked),
        ));
        assert_eq!(next, rule);
    }

    #[test]
    fn field_change_and_delete_request() {
        let rule = Rule::default();
        let next = updated(update_rule(
            &rule,
            RuleMessage::FieldChanged("amount".to_string()),
        ));
        assert_eq!(next.field, "amount");
        assert_eq!(
            update_rule(&next, RuleMessage::DeleteClicked),
            EditorEvent::DeleteRequested
        );
    }
}
