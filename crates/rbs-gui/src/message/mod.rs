//! Message module for Ruleset Builder Studio.
//!
//! All user interactions and background results flow through [`Message`].

pub mod editor;
pub mod workspace;

use std::path::PathBuf;
use std::time::Instant;

use rbs_model::RulesetCollection;

use crate::theme::ThemeMode;

pub use editor::{ConditionMessage, RuleMessage};
pub use workspace::WorkspaceMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Workspace messages
    Workspace(WorkspaceMessage),

    // =========================================================================
    // Confirmation modal
    // =========================================================================
    ConfirmAccepted,
    ConfirmCancelled,

    // =========================================================================
    // Notification banner
    // =========================================================================
    DismissNotification,

    /// Periodic tick while a notification is open (auto-hide)
    NotificationTick(Instant),

    // =========================================================================
    // Settings
    // =========================================================================
    ThemeModeSelected(ThemeMode),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Open dialog returned (`None` = cancelled)
    ImportPathSelected(Option<PathBuf>),

    /// Ruleset file read and parsed
    ImportCompleted(Result<RulesetCollection, String>),

    /// Save dialog returned (`None` = cancelled)
    ExportPathSelected(Option<PathBuf>),

    /// Ruleset file written
    ExportCompleted(Result<PathBuf, String>),
}
