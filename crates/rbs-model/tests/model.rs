//! Tests for rbs-model types.

use rbs_model::{
    Action, ActionType, Condition, ErrorMessage, ErrorType, Rule, RuleValidationError, Ruleset,
    RulesetCollection, validate_rule, validate_rules,
};
use serde_json::json;

#[test]
fn default_condition_matches_editor_template() {
    let value = serde_json::to_value(Condition::default()).expect("serialize condition");
    assert_eq!(
        value,
        json!({
            "condition": "",
            "error_message": { "code": "", "error_type": "warning", "message": "" },
            "action": { "type": "", "value": "" }
        })
    );
}

#[test]
fn default_rule_is_empty() {
    let value = serde_json::to_value(Rule::default()).expect("serialize rule");
    assert_eq!(value, json!({ "field": "", "conditions": [] }));
}

#[test]
fn missing_condition_fields_default_on_import() {
    let condition: Condition =
        serde_json::from_value(json!({ "condition": "x > 1" })).expect("deserialize condition");
    assert_eq!(condition.condition, "x > 1");
    assert_eq!(condition.error_message.error_type, ErrorType::Warning);
    assert_eq!(condition.action.action_type, ActionType::None);
}

#[test]
fn unknown_values_and_properties_survive() {
    let source = json!({
        "field": "status",
        "conditions": [{
            "condition": "status != ''",
            "error_message": { "code": "S1", "error_type": "critical", "message": "blank" },
            "action": { "type": "uppercase", "value": "" },
            "note": "kept"
        }],
        "actionType": ""
    });
    let rule: Rule = serde_json::from_value(source.clone()).expect("deserialize rule");
    assert_eq!(
        rule.conditions[0].error_message.error_type,
        ErrorType::Other("critical".to_string())
    );
    assert_eq!(rule.extra.get("actionType"), Some(&json!("")));

    let back = serde_json::to_value(&rule).expect("serialize rule");
    assert_eq!(back, source);
}

#[test]
fn collection_keeps_insertion_order() {
    let mut collection = RulesetCollection::new();
    collection.insert("zeta".to_string(), Ruleset::default());
    collection.insert("alpha".to_string(), Ruleset::default());
    let names: Vec<&str> = collection.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
}

#[test]
fn validate_rule_reports_field_first() {
    assert_eq!(
        validate_rule(&Rule::default()),
        Err(RuleValidationError::MissingField)
    );
    assert_eq!(
        validate_rule(&Rule::new("x")),
        Err(RuleValidationError::NoConditions)
    );
    assert_eq!(
        validate_rule(&Rule::new("x").with_condition(Condition::default())),
        Ok(())
    );
}

#[test]
fn validation_messages() {
    assert_eq!(
        RuleValidationError::MissingField.to_string(),
        "Field is required"
    );
    assert_eq!(
        RuleValidationError::NoConditions.to_string(),
        "At least one condition is required"
    );
}

#[test]
fn validate_rules_collects_every_failure() {
    let rules = vec![
        Rule::new("ok").with_condition(Condition::new("ok != ''")),
        Rule::default(),
        Rule::new("amount"),
    ];
    let issues = validate_rules(&rules);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].index, 1);
    assert_eq!(issues[0].error, RuleValidationError::MissingField);
    assert_eq!(issues[1].index, 2);
    assert_eq!(issues[1].error, RuleValidationError::NoConditions);
}

#[test]
fn wrong_typed_leaves_fall_back_on_import() {
    let rule: Rule = serde_json::from_value(json!({
        "field": 12,
        "conditions": [
            {
                "condition": null,
                "error_message": { "code": 5, "error_type": 3, "message": ["x"] },
                "action": "set"
            },
            "stray"
        ]
    }))
    .expect("deserialize rule");

    assert_eq!(rule.field, "12");
    assert_eq!(rule.conditions.len(), 2);
    let first = &rule.conditions[0];
    assert_eq!(first.condition, "");
    assert_eq!(first.error_message.code, "5");
    assert_eq!(first.error_message.error_type, ErrorType::Other("3".to_string()));
    assert_eq!(first.error_message.message, "");
    assert_eq!(first.action, Action::default());
    assert_eq!(rule.conditions[1], Condition::default());
}

#[test]
fn null_conditions_import_as_empty() {
    let ruleset: Ruleset = serde_json::from_value(json!({
        "rules": [{ "field": "amount", "conditions": null }, 4]
    }))
    .expect("deserialize ruleset");
    assert_eq!(ruleset.rules, vec![Rule::new("amount"), Rule::default()]);
}

#[test]
fn condition_builders() {
    let condition = Condition {
        condition: "amount > 0".to_string(),
        error_message: ErrorMessage::new("E1", ErrorType::Error, "must be positive"),
        action: Action::new(ActionType::Set, "0"),
        ..Default::default()
    };
    let value = serde_json::to_value(&condition).expect("serialize condition");
    assert_eq!(value["action"], json!({ "type": "set", "value": "0" }));
    assert_eq!(Condition::new("a").action.action_type, ActionType::None);
}
