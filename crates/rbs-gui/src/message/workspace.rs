//! Workspace messages: ruleset management, rule list, import and export.

use super::editor::RuleMessage;

/// Messages for the ruleset workspace.
#[derive(Debug, Clone)]
pub enum WorkspaceMessage {
    // =========================================================================
    // Ruleset selection and lifecycle
    // =========================================================================
    /// User picked an entry in the ruleset selector (`None` = "None").
    RulesetSelected(Option<String>),

    /// User clicked "New RuleSet" to reveal the name entry
    NewRulesetClicked,

    NewRulesetNameChanged(String),

    /// User clicked "Add" next to the name entry
    CreateRulesetClicked,

    /// User clicked "Cancel" next to the name entry
    NewRulesetCancelled,

    /// User clicked "Delete RuleSet" (asks for confirmation)
    DeleteRulesetClicked,

    // =========================================================================
    // Rules
    // =========================================================================
    AddRuleClicked,

    /// Message from the rule editor at the given index
    Rule(usize, RuleMessage),

    // =========================================================================
    // Import / export
    // =========================================================================
    /// User clicked "Load Rules"
    LoadClicked,

    /// User clicked "Save Rules"
    SaveClicked,
}
