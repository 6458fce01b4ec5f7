//! Workspace behavior through the public message and state API.

use proptest::prelude::*;
use rbs_gui::message::{ConditionMessage, RuleMessage};
use rbs_gui::state::WorkspaceState;
use rbs_model::{ErrorType, Rule};
use serde_json::json;

fn selected(name: &str) -> WorkspaceState {
    let mut ws = WorkspaceState::new();
    ws.create_ruleset(name).unwrap();
    ws.select_ruleset(Some(name.to_string()));
    ws
}

#[test]
fn orders_scenario_exports_expected_document() {
    let mut ws = selected("orders");
    ws.add_rule().unwrap();
    ws.apply_rule_message(0, RuleMessage::FieldChanged("amount".to_string()))
        .unwrap();
    ws.apply_rule_message(0, RuleMessage::AddConditionClicked)
        .unwrap();

    let edits = [
        ConditionMessage::ExpressionChanged("amount > 0".to_string()),
        ConditionMessage::CodeChanged("E1".to_string()),
        ConditionMessage::ErrorTypeSelected(ErrorType::Error),
        ConditionMessage::MessageChanged("must be positive".to_string()),
    ];
    for edit in edits {
        ws.apply_rule_message(0, RuleMessage::Condition(0, edit))
            .unwrap();
    }

    let exported = ws.prepare_export().unwrap();
    let text = rbs_persistence::to_json_string(&exported).unwrap();
    let document: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        document["orders"]["rules"][0],
        json!({
            "field": "amount",
            "conditions": [{
                "condition": "amount > 0",
                "error_message": {
                    "code": "E1",
                    "error_type": "error",
                    "message": "must be positive"
                },
                "action": { "type": "", "value": "" }
            }]
        })
    );
}

#[test]
fn export_of_new_rule_names_missing_field() {
    let mut ws = selected("orders");
    ws.add_rule().unwrap();

    assert!(ws.prepare_export().is_err());
    assert!(ws.notification.open);
    assert_eq!(
        ws.notification.message,
        "Rule validation error: Field is required"
    );
}

#[test]
fn create_then_select_yields_empty_rules() {
    let mut ws = WorkspaceState::new();
    ws.create_ruleset("orders").unwrap();
    ws.select_ruleset(Some("orders".to_string()));
    assert!(ws.rules().is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Update(usize, String),
    Delete(usize),
    Cancel(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0..8usize, "[a-z]{1,6}").prop_map(|(i, f)| Op::Update(i, f)),
        (0..8usize).prop_map(Op::Delete),
        (0..8usize).prop_map(Op::Cancel),
    ]
}

proptest! {
    #[test]
    fn working_rules_always_match_collection(ops in prop::collection::vec(op(), 0..40)) {
        let mut ws = selected("orders");

        for op in ops {
            let before: Vec<Rule> = ws.rules().to_vec();
            match op {
                Op::Add => {
                    ws.add_rule().unwrap();
                    prop_assert_eq!(ws.rules().len(), before.len() + 1);
                }
                Op::Update(i, field) => {
                    let result = ws.update_rule(i, Rule::new(field.clone()));
                    prop_assert_eq!(result.is_ok(), i < before.len());
                    if i < before.len() {
                        prop_assert_eq!(&ws.rules()[i].field, &field);
                    }
                }
                Op::Delete(i) => {
                    ws.request_delete_rule(i);
                    let _ = ws.confirm_pending();
                    if i < before.len() {
                        let mut expected = before.clone();
                        expected.remove(i);
                        prop_assert_eq!(ws.rules(), expected.as_slice());
                    } else {
                        prop_assert_eq!(ws.rules(), before.as_slice());
                    }
                }
                Op::Cancel(i) => {
                    ws.request_delete_rule(i);
                    ws.cancel_pending();
                    prop_assert_eq!(ws.rules(), before.as_slice());
                }
            }
            prop_assert_eq!(ws.rules(), ws.rulesets()["orders"].rules.as_slice());
        }
    }

    #[test]
    fn blank_names_never_create(name in "[ \t]{0,5}") {
        let mut ws = WorkspaceState::new();
        prop_assert!(ws.create_ruleset(&name).is_err());
        prop_assert!(ws.rulesets().is_empty());
    }
}
