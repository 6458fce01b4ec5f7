//! Workspace message handler.
//!
//! Handles:
//! - Ruleset selection, creation and deletion requests
//! - Rule list edits routed from the rule editors
//! - Load / Save button clicks (dialogs live in `files`)

use iced::Task;

use super::{MessageHandler, files};
use crate::message::{Message, WorkspaceMessage};
use crate::state::AppState;

/// Handler for workspace messages.
///
/// Rejected operations are already reported by the workspace (notification
/// or log), so their `Err` values are dropped here.
pub struct WorkspaceHandler;

impl MessageHandler<WorkspaceMessage> for WorkspaceHandler {
    fn handle(&self, state: &mut AppState, msg: WorkspaceMessage) -> Task<Message> {
        let workspace = &mut state.workspace;
        match msg {
            WorkspaceMessage::RulesetSelected(name) => {
                workspace.select_ruleset(name);
                Task::none()
            }

            WorkspaceMessage::NewRulesetClicked => {
                workspace.new_ruleset.visible = true;
                Task::none()
            }

            WorkspaceMessage::NewRulesetNameChanged(name) => {
                workspace.new_ruleset.name = name;
                Task::none()
            }

            WorkspaceMessage::CreateRulesetClicked => {
                let _ = workspace.create_ruleset_from_input();
                Task::none()
            }

            WorkspaceMessage::NewRulesetCancelled => {
                workspace.new_ruleset = Default::default();
                Task::none()
            }

            WorkspaceMessage::DeleteRulesetClicked => {
                workspace.request_delete_ruleset();
                Task::none()
            }

            WorkspaceMessage::AddRuleClicked => {
                let _ = workspace.add_rule();
                Task::none()
            }

            WorkspaceMessage::Rule(index, rule_msg) => {
                let _ = workspace.apply_rule_message(index, rule_msg);
                Task::none()
            }

            WorkspaceMessage::LoadClicked => files::handle_load_clicked(state),

            WorkspaceMessage::SaveClicked => files::handle_save_clicked(state),
        }
    }
}
