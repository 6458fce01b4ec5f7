//! Ruleset workspace state.
//!
//! `WorkspaceState` owns the ruleset collection for the session, the current
//! selection and its working copy of rules. The working copy is mirrored
//! into the collection after every rule mutation, so
//! `rules() == rulesets()[current].rules` holds between messages.
//!
//! Every operation is synchronous and UI-free; the handler layer wires the
//! file dialogs and background I/O around it.

use std::path::PathBuf;

use rbs_model::{Rule, RulesetCollection, validate_rules};

use super::confirm::{Confirmation, PendingAction};
use super::notification::Notification;
use crate::error::GuiError;
use crate::handler::editor::{EditorEvent, update_rule};
use crate::message::RuleMessage;

/// Text entry for a new ruleset name.
#[derive(Debug, Clone, Default)]
pub struct NewRulesetInput {
    pub visible: bool,
    pub name: String,
}

impl NewRulesetInput {
    /// Whether "Add" should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn reset(&mut self) {
        self.visible = false;
        self.name.clear();
    }
}

/// Authoritative editing state for the session.
#[derive(Debug, Default)]
pub struct WorkspaceState {
    all_rulesets: RulesetCollection,
    current: Option<String>,
    /// Working copy of `all_rulesets[current].rules`.
    rules: Vec<Rule>,
    is_loading: bool,

    pub notification: Notification,
    pub confirmation: Confirmation,
    pub new_ruleset: NewRulesetInput,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn rulesets(&self) -> &RulesetCollection {
        &self.all_rulesets
    }

    /// Ruleset names in display order.
    pub fn ruleset_names(&self) -> Vec<String> {
        self.all_rulesets.keys().cloned().collect()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// "Save Rules" is disabled while the collection is empty or loading.
    pub fn can_export(&self) -> bool {
        !self.all_rulesets.is_empty() && !self.is_loading
    }

    // =========================================================================
    // RULESETS
    // =========================================================================

    /// Select a ruleset (or none) and load its rules into the working copy.
    ///
    /// A name missing from the collection selects an empty rule list.
    pub fn select_ruleset(&mut self, name: Option<String>) {
        self.rules = name
            .as_ref()
            .and_then(|name| self.all_rulesets.get(name))
            .map(|ruleset| ruleset.rules.clone())
            .unwrap_or_default();
        tracing::debug!(ruleset = ?name, rules = self.rules.len(), "Selected ruleset");
        self.current = name;
    }

    /// Create an empty ruleset named by the new-ruleset entry.
    pub fn create_ruleset_from_input(&mut self) -> Result<(), GuiError> {
        let name = self.new_ruleset.name.clone();
        self.create_ruleset(&name)
    }

    /// Insert an empty ruleset under `name`.
    ///
    /// Rejects blank (after trimming) and existing names. On success the
    /// selection is cleared; the new ruleset is not selected.
    pub fn create_ruleset(&mut self, name: &str) -> Result<(), GuiError> {
        if name.trim().is_empty() {
            return self.fail(GuiError::EmptyRulesetName);
        }
        if self.all_rulesets.contains_key(name) {
            return self.fail(GuiError::DuplicateRulesetName {
                name: name.to_string(),
            });
        }

        self.all_rulesets
            .insert(name.to_string(), Default::default());
        self.current = None;
        self.rules.clear();
        self.new_ruleset.reset();

        tracing::info!(ruleset = name, "Created ruleset");
        self.notification.success("New ruleset created successfully");
        Ok(())
    }

    /// Ask to delete the selected ruleset. No-op when nothing is selected.
    pub fn request_delete_ruleset(&mut self) {
        if let Some(name) = self.current.clone() {
            self.confirmation
                .request(PendingAction::DeleteRuleset { name });
        }
    }

    fn delete_ruleset(&mut self, name: &str) {
        self.all_rulesets.shift_remove(name);
        self.current = None;
        self.rules.clear();

        tracing::info!(ruleset = name, "Deleted ruleset");
        self.notification.info("Ruleset deleted successfully");
    }

    // =========================================================================
    // RULES
    // =========================================================================

    /// Append an empty rule to the selected ruleset.
    pub fn add_rule(&mut self) -> Result<(), GuiError> {
        if self.current.is_none() {
            return self.fail(GuiError::NoRulesetSelected);
        }
        self.rules.push(Rule::default());
        self.mirror_rules();
        Ok(())
    }

    /// Replace the rule at `index`.
    pub fn update_rule(&mut self, index: usize, rule: Rule) -> Result<(), GuiError> {
        if self.current.is_none() {
            return self.fail(GuiError::NoRulesetSelected);
        }
        let Some(slot) = self.rules.get_mut(index) else {
            return self.fail(GuiError::RuleNotFound { index });
        };
        *slot = rule;
        self.mirror_rules();
        Ok(())
    }

    /// Route a rule editor message: edits replace the rule, a delete click
    /// asks for confirmation.
    pub fn apply_rule_message(&mut self, index: usize, msg: RuleMessage) -> Result<(), GuiError> {
        let Some(rule) = self.rules.get(index) else {
            return self.fail(GuiError::RuleNotFound { index });
        };
        match update_rule(rule, msg) {
            EditorEvent::Updated(updated) => self.update_rule(index, updated),
            EditorEvent::DeleteRequested => {
                self.request_delete_rule(index);
                Ok(())
            }
        }
    }

    /// Ask to delete the rule at `index`.
    pub fn request_delete_rule(&mut self, index: usize) {
        if index < self.rules.len() {
            self.confirmation
                .request(PendingAction::DeleteRule { index });
        }
    }

    fn delete_rule(&mut self, index: usize) -> Result<(), GuiError> {
        if index >= self.rules.len() {
            return self.fail(GuiError::RuleNotFound { index });
        }
        self.rules.remove(index);
        self.mirror_rules();

        tracing::info!(ruleset = ?self.current, index, "Deleted rule");
        self.notification.info("Rule deleted successfully");
        Ok(())
    }

    /// Copy the working rules into the selected collection entry.
    ///
    /// Always copies the list that was just modified, never an older one.
    fn mirror_rules(&mut self) {
        if let Some(name) = &self.current {
            self.all_rulesets.entry(name.clone()).or_default().rules = self.rules.clone();
        }
    }

    // =========================================================================
    // CONFIRMATION
    // =========================================================================

    /// Perform the pending destructive action.
    ///
    /// A ruleset delete only applies while that ruleset is still selected.
    pub fn confirm_pending(&mut self) -> Result<(), GuiError> {
        match self.confirmation.confirm() {
            Some(PendingAction::DeleteRuleset { name }) => {
                if self.current.as_deref() == Some(name.as_str()) {
                    self.delete_ruleset(&name);
                } else {
                    tracing::debug!(ruleset = %name, "Dropping delete for deselected ruleset");
                }
                Ok(())
            }
            Some(PendingAction::DeleteRule { index }) => self.delete_rule(index),
            None => Ok(()),
        }
    }

    /// Drop the pending action. State is unchanged and nothing is notified.
    pub fn cancel_pending(&mut self) {
        self.confirmation.cancel();
    }

    // =========================================================================
    // VALIDATION & EXPORT
    // =========================================================================

    /// Check every working rule before export.
    ///
    /// All failures are logged; the notification names the first one.
    pub fn validate_rules(&mut self) -> Result<(), GuiError> {
        let issues = validate_rules(&self.rules);
        for issue in &issues {
            tracing::warn!(index = issue.index, error = %issue.error, "Rule failed validation");
        }
        match issues.first() {
            Some(issue) => self.fail(GuiError::RuleValidation {
                index: issue.index,
                error: issue.error,
            }),
            None => Ok(()),
        }
    }

    /// Validate the selected ruleset's rules and, if they pass, return the
    /// whole collection for export.
    pub fn prepare_export(&mut self) -> Result<RulesetCollection, GuiError> {
        if self.is_loading {
            return self.fail(GuiError::Busy);
        }
        self.validate_rules()?;
        Ok(self.all_rulesets.clone())
    }

    pub fn finish_export(&mut self, result: Result<PathBuf, String>) -> Result<(), GuiError> {
        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Rules file written");
                self.notification.success("Rules file downloaded successfully!");
                Ok(())
            }
            Err(reason) => self.fail(GuiError::Export { reason }),
        }
    }

    // =========================================================================
    // IMPORT
    // =========================================================================

    /// Raise the loading flag. Fails while another import is running.
    pub fn begin_import(&mut self) -> Result<(), GuiError> {
        if self.is_loading {
            return self.fail(GuiError::Busy);
        }
        self.is_loading = true;
        Ok(())
    }

    /// Apply an import result and clear the loading flag.
    ///
    /// Success replaces the whole collection and clears the selection;
    /// failure leaves every part of the prior state as it was.
    pub fn finish_import(
        &mut self,
        result: Result<RulesetCollection, String>,
    ) -> Result<(), GuiError> {
        self.is_loading = false;
        match result {
            Ok(collection) => {
                tracing::info!(rulesets = collection.len(), "Replaced ruleset collection");
                self.all_rulesets = collection;
                self.current = None;
                self.rules.clear();
                self.confirmation.cancel();
                self.notification.success("Rules file loaded successfully!");
                Ok(())
            }
            Err(reason) => self.fail(GuiError::Import { reason }),
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Report an error: notify if user-facing, log otherwise.
    fn fail<T>(&mut self, error: GuiError) -> Result<T, GuiError> {
        if error.is_user_facing() {
            tracing::warn!(%error, "Workspace operation rejected");
            self.notification.error(error.to_string());
        } else {
            tracing::debug!(%error, "Ignoring stale workspace message");
        }
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ConditionMessage;
    use crate::state::notification::Severity;
    use rbs_model::{Condition, Ruleset};

    fn workspace_with(name: &str) -> WorkspaceState {
        let mut ws = WorkspaceState::new();
        ws.create_ruleset(name).unwrap();
        ws.select_ruleset(Some(name.to_string()));
        ws
    }

    fn assert_mirrored(ws: &WorkspaceState) {
        let name = ws.current_name().unwrap();
        assert_eq!(ws.rules(), ws.rulesets()[name].rules.as_slice());
    }

    #[test]
    fn created_ruleset_is_not_selected() {
        let mut ws = WorkspaceState::new();
        ws.create_ruleset("orders").unwrap();

        assert_eq!(ws.current_name(), None);
        assert!(ws.rulesets()["orders"].rules.is_empty());
        assert_eq!(ws.notification.severity, Severity::Success);
        assert_eq!(ws.notification.message, "New ruleset created successfully");
    }

    #[test]
    fn blank_and_duplicate_names_are_rejected() {
        let mut ws = WorkspaceState::new();
        ws.create_ruleset("orders").unwrap();

        assert_eq!(ws.create_ruleset("   "), Err(GuiError::EmptyRulesetName));
        assert_eq!(ws.notification.message, "Ruleset name cannot be empty");

        assert!(matches!(
            ws.create_ruleset("orders"),
            Err(GuiError::DuplicateRulesetName { .. })
        ));
        assert_eq!(ws.notification.message, "Ruleset name already exists");
        assert_eq!(ws.notification.severity, Severity::Error);
        assert_eq!(ws.rulesets().len(), 1);
    }

    #[test]
    fn create_from_input_resets_entry() {
        let mut ws = WorkspaceState::new();
        ws.new_ruleset.visible = true;
        ws.new_ruleset.name = "orders".to_string();
        ws.create_ruleset_from_input().unwrap();

        assert!(!ws.new_ruleset.visible);
        assert!(ws.new_ruleset.name.is_empty());
        assert!(ws.rulesets().contains_key("orders"));
    }

    #[test]
    fn selecting_unknown_name_yields_no_rules() {
        let mut ws = WorkspaceState::new();
        ws.select_ruleset(Some("ghost".to_string()));
        assert_eq!(ws.current_name(), Some("ghost"));
        assert!(ws.rules().is_empty());
    }

    #[test]
    fn add_rule_mirrors_the_new_list() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();
        ws.add_rule().unwrap();

        assert_eq!(ws.rules().len(), 2);
        assert_mirrored(&ws);
    }

    #[test]
    fn add_rule_without_selection_is_ignored() {
        let mut ws = WorkspaceState::new();
        assert_eq!(ws.add_rule(), Err(GuiError::NoRulesetSelected));
        assert!(ws.rulesets().is_empty());
        assert!(!ws.notification.open);
    }

    #[test]
    fn rule_deletion_waits_for_confirmation() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();
        ws.apply_rule_message(0, RuleMessage::DeleteClicked).unwrap();

        assert_eq!(ws.rules().len(), 1);
        assert!(ws.confirmation.is_pending());

        ws.notification.dismiss();
        ws.cancel_pending();
        assert_eq!(ws.rules().len(), 1);
        assert!(!ws.notification.open);

        ws.request_delete_rule(0);
        ws.confirm_pending().unwrap();
        assert!(ws.rules().is_empty());
        assert_mirrored(&ws);
        assert_eq!(ws.notification.message, "Rule deleted successfully");
        assert_eq!(ws.notification.severity, Severity::Info);
    }

    #[test]
    fn delete_rule_removes_exactly_one_index() {
        let mut ws = workspace_with("orders");
        for field in ["a", "b", "c", "d"] {
            ws.add_rule().unwrap();
            let index = ws.rules().len() - 1;
            ws.update_rule(index, Rule::new(field)).unwrap();
        }

        ws.request_delete_rule(1);
        ws.confirm_pending().unwrap();

        let fields: Vec<&str> = ws.rules().iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, ["a", "c", "d"]);
        assert_mirrored(&ws);
    }

    #[test]
    fn ruleset_deletion_clears_selection() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();
        ws.request_delete_ruleset();
        assert_eq!(
            ws.confirmation.pending(),
            Some(&PendingAction::DeleteRuleset {
                name: "orders".to_string()
            })
        );

        ws.confirm_pending().unwrap();
        assert!(ws.rulesets().is_empty());
        assert_eq!(ws.current_name(), None);
        assert!(ws.rules().is_empty());
        assert_eq!(ws.notification.message, "Ruleset deleted successfully");
    }

    #[test]
    fn ruleset_deletion_without_selection_is_noop() {
        let mut ws = WorkspaceState::new();
        ws.create_ruleset("orders").unwrap();
        ws.request_delete_ruleset();
        assert!(!ws.confirmation.is_pending());
    }

    #[test]
    fn editor_messages_flow_into_collection() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();
        ws.apply_rule_message(0, RuleMessage::FieldChanged("amount".to_string()))
            .unwrap();
        ws.apply_rule_message(0, RuleMessage::AddConditionClicked)
            .unwrap();
        ws.apply_rule_message(
            0,
            RuleMessage::Condition(0, ConditionMessage::ExpressionChanged("amount > 0".into())),
        )
        .unwrap();

        assert_eq!(ws.rulesets()["orders"].rules[0].field, "amount");
        assert_eq!(
            ws.rulesets()["orders"].rules[0].conditions,
            vec![Condition::new("amount > 0")]
        );
        assert_mirrored(&ws);
    }

    #[test]
    fn export_requires_valid_working_rules() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();

        assert!(ws.prepare_export().is_err());
        assert_eq!(
            ws.notification.message,
            "Rule validation error: Field is required"
        );

        ws.update_rule(0, Rule::new("amount")).unwrap();
        ws.prepare_export().unwrap_err();
        assert_eq!(
            ws.notification.message,
            "Rule validation error: At least one condition is required"
        );

        ws.update_rule(0, Rule::new("amount").with_condition(Condition::default()))
            .unwrap();
        let exported = ws.prepare_export().unwrap();
        assert_eq!(&exported, ws.rulesets());
    }

    #[test]
    fn export_only_checks_selected_ruleset() {
        let mut ws = workspace_with("broken");
        ws.add_rule().unwrap();
        ws.create_ruleset("clean").unwrap();
        ws.select_ruleset(Some("clean".to_string()));

        let exported = ws.prepare_export().unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported["broken"].rules, vec![Rule::default()]);
    }

    #[test]
    fn export_result_notifications() {
        let mut ws = WorkspaceState::new();
        ws.finish_export(Ok(PathBuf::from("rulesets.json"))).unwrap();
        assert_eq!(ws.notification.message, "Rules file downloaded successfully!");

        ws.finish_export(Err("disk full".to_string())).unwrap_err();
        assert_eq!(ws.notification.message, "Error downloading file: disk full");
        assert_eq!(ws.notification.severity, Severity::Error);
    }

    #[test]
    fn import_replaces_collection_and_clears_loading() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();

        ws.begin_import().unwrap();
        assert!(ws.is_loading());
        assert!(!ws.can_export());
        assert_eq!(ws.begin_import(), Err(GuiError::Busy));
        assert_eq!(ws.prepare_export(), Err(GuiError::Busy));

        let mut incoming = RulesetCollection::new();
        incoming.insert("customers".to_string(), Ruleset::default());
        ws.finish_import(Ok(incoming.clone())).unwrap();

        assert!(!ws.is_loading());
        assert_eq!(ws.rulesets(), &incoming);
        assert_eq!(ws.current_name(), None);
        assert!(ws.rules().is_empty());
        assert_eq!(ws.notification.message, "Rules file loaded successfully!");
    }

    #[test]
    fn failed_import_keeps_prior_state() {
        let mut ws = workspace_with("orders");
        ws.add_rule().unwrap();
        let before = ws.rulesets().clone();

        ws.begin_import().unwrap();
        ws.finish_import(Err("Invalid ruleset structure for \"A\"".to_string()))
            .unwrap_err();

        assert!(!ws.is_loading());
        assert_eq!(ws.rulesets(), &before);
        assert_eq!(ws.current_name(), Some("orders"));
        assert_eq!(ws.rules().len(), 1);
        assert_eq!(
            ws.notification.message,
            "Error loading file: Invalid ruleset structure for \"A\""
        );
    }

    #[test]
    fn import_drops_pending_ruleset_delete() {
        let mut ws = workspace_with("orders");
        ws.begin_import().unwrap();
        ws.request_delete_ruleset();
        assert!(ws.confirmation.is_pending());

        let mut incoming = RulesetCollection::new();
        incoming.insert("orders".to_string(), Ruleset::default());
        incoming.insert("customers".to_string(), Ruleset::default());
        ws.finish_import(Ok(incoming.clone())).unwrap();
        assert!(!ws.confirmation.is_pending());

        ws.confirm_pending().unwrap();
        assert_eq!(ws.rulesets(), &incoming);
        assert_eq!(ws.notification.message, "Rules file loaded successfully!");
    }

    #[test]
    fn ruleset_delete_skipped_after_selection_changes() {
        let mut ws = workspace_with("orders");
        ws.create_ruleset("customers").unwrap();
        ws.select_ruleset(Some("orders".to_string()));
        ws.request_delete_ruleset();

        ws.select_ruleset(None);
        ws.confirm_pending().unwrap();

        assert_eq!(ws.rulesets().len(), 2);
        assert!(!ws.confirmation.is_pending());
    }
}
