//! Application-level state.

use super::{Settings, WorkspaceState};
use crate::theme::ThemeMode;

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Rulesets being edited this session
    pub workspace: WorkspaceState,
    /// Application settings (persisted)
    pub settings: Settings,
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            workspace: WorkspaceState::new(),
            settings,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.display.theme_mode
    }

    /// Switch theme and persist the choice.
    ///
    /// A failed save is logged; the new theme still applies for the session.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        if self.settings.display.theme_mode == mode {
            return;
        }
        self.settings.display.theme_mode = mode;
        self.persist_settings();
    }

    /// Save settings to disk, logging any failure.
    pub fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!(error = %format!("{e:#}"), "Failed to save settings");
        }
    }
}
