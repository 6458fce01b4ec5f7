//! Rules file import and export.
//!
//! Load: "Load Rules" -> open dialog -> [`Message::ImportPathSelected`] ->
//! background read -> [`Message::ImportCompleted`].
//!
//! Save: "Save Rules" -> validation -> save dialog ->
//! [`Message::ExportPathSelected`] -> background write ->
//! [`Message::ExportCompleted`].
//!
//! Cancelling either dialog changes nothing and shows nothing.

use std::path::PathBuf;

use iced::Task;
use rbs_model::RulesetCollection;
use rbs_persistence::DEFAULT_FILE_NAME;

use crate::message::Message;
use crate::service::{load_rules, save_rules};
use crate::state::AppState;

const FILTER_NAME: &str = "JSON Rules";
const FILTER_EXTENSIONS: &[&str] = &["json"];

// =============================================================================
// IMPORT
// =============================================================================

/// Handle a "Load Rules" click.
pub fn handle_load_clicked(state: &mut AppState) -> Task<Message> {
    if state.workspace.is_loading() {
        return Task::none();
    }
    let start_dir = state.settings.files.last_directory.clone();

    // On macOS, use synchronous dialog to avoid security-scoped access issues
    #[cfg(target_os = "macos")]
    {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Load Rules")
            .add_filter(FILTER_NAME, FILTER_EXTENSIONS);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        Task::done(Message::ImportPathSelected(dialog.pick_file()))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Load Rules")
                .add_filter(FILTER_NAME, FILTER_EXTENSIONS);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file().await.map(|f| f.path().to_path_buf())
        },
        Message::ImportPathSelected,
    )
}

/// Handle the open dialog result.
pub fn handle_import_path_selected(state: &mut AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    if state.workspace.begin_import().is_err() {
        return Task::none();
    }

    tracing::info!(path = %path.display(), "Loading rules file");
    state.settings.remember_directory(&path);
    state.persist_settings();

    Task::perform(load_rules(path), Message::ImportCompleted)
}

/// Handle a finished background read.
pub fn handle_import_completed(
    state: &mut AppState,
    result: Result<RulesetCollection, String>,
) -> Task<Message> {
    let _ = state.workspace.finish_import(result);
    Task::none()
}

// =============================================================================
// EXPORT
// =============================================================================

/// Handle a "Save Rules" click.
///
/// The selected ruleset's rules must pass validation before the save dialog
/// opens.
pub fn handle_save_clicked(state: &mut AppState) -> Task<Message> {
    if !state.workspace.can_export() || state.workspace.validate_rules().is_err() {
        return Task::none();
    }
    let start_dir = state.settings.files.last_directory.clone();

    #[cfg(target_os = "macos")]
    {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Rules")
            .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
            .set_file_name(DEFAULT_FILE_NAME);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        Task::done(Message::ExportPathSelected(dialog.save_file()))
    }

    #[cfg(not(target_os = "macos"))]
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Save Rules")
                .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
                .set_file_name(DEFAULT_FILE_NAME);
            if let Some(dir) = start_dir {
                dialog = dialog.set_directory(dir);
            }
            dialog.save_file().await.map(|f| f.path().to_path_buf())
        },
        Message::ExportPathSelected,
    )
}

/// Handle the save dialog result.
///
/// The collection is snapshotted here, so edits made while the write runs
/// are not part of the file.
pub fn handle_export_path_selected(state: &mut AppState, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Ok(collection) = state.workspace.prepare_export() else {
        return Task::none();
    };

    tracing::info!(path = %path.display(), rulesets = collection.len(), "Saving rules file");
    state.settings.remember_directory(&path);
    state.persist_settings();

    Task::perform(save_rules(collection, path), Message::ExportCompleted)
}

/// Handle a finished background write.
pub fn handle_export_completed(
    state: &mut AppState,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    let _ = state.workspace.finish_export(result);
    Task::none()
}
