//! Main application module for Ruleset Builder Studio.
//!
//! Elm architecture: State -> Message -> Update -> View.
//!
//! - All state changes happen in `update()`; views are pure functions
//! - File dialogs and file I/O run through `Task::perform`
//! - The notification auto-hide timer is a subscription that only runs while
//!   a notification is open

use std::time::Duration;

use iced::{Element, Subscription, Task, Theme, time};

use crate::handler::{MessageHandler, WorkspaceHandler, files};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::workbench_theme;
use crate::view::{APP_TITLE, view_app};

/// How often an open notification checks whether it has expired.
const NOTIFICATION_TICK: Duration = Duration::from_secs(1);

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Settings are read from disk; the ruleset
    /// workspace always starts empty.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(theme = %settings.display.theme_mode, "Loaded settings");

        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Workspace
            // =================================================================
            Message::Workspace(msg) => WorkspaceHandler.handle(&mut self.state, msg),

            // =================================================================
            // Confirmation modal
            // =================================================================
            Message::ConfirmAccepted => {
                let _ = self.state.workspace.confirm_pending();
                Task::none()
            }

            Message::ConfirmCancelled => {
                self.state.workspace.cancel_pending();
                Task::none()
            }

            // =================================================================
            // Notification banner
            // =================================================================
            Message::DismissNotification => {
                self.state.workspace.notification.dismiss();
                Task::none()
            }

            Message::NotificationTick(now) => {
                self.state.workspace.notification.expire(now);
                Task::none()
            }

            // =================================================================
            // Settings
            // =================================================================
            Message::ThemeModeSelected(mode) => {
                self.state.set_theme_mode(mode);
                Task::none()
            }

            // =================================================================
            // Background task results
            // =================================================================
            Message::ImportPathSelected(path) => {
                files::handle_import_path_selected(&mut self.state, path)
            }

            Message::ImportCompleted(result) => {
                files::handle_import_completed(&mut self.state, result)
            }

            Message::ExportPathSelected(path) => {
                files::handle_export_path_selected(&mut self.state, path)
            }

            Message::ExportCompleted(result) => {
                files::handle_export_completed(&mut self.state, result)
            }
        }
    }

    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title, with the selected ruleset when there is one.
    pub fn title(&self) -> String {
        match self.state.workspace.current_name() {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        workbench_theme(self.state.theme_mode())
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.state.workspace.notification.open {
            time::every(NOTIFICATION_TICK).map(Message::NotificationTick)
        } else {
            Subscription::none()
        }
    }
}
