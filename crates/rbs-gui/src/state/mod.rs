//! Application state management.
//!
//! - **AppState**: root state handed to every handler
//! - **WorkspaceState**: ruleset collection, selection and working rules
//! - **Notification**: transient banner
//! - **Confirmation**: pending destructive action
//! - **Settings**: persisted preferences

mod app_state;
mod confirm;
mod notification;
mod settings;
mod workspace;

pub use app_state::AppState;
pub use confirm::{Confirmation, PendingAction};
pub use notification::{AUTO_HIDE_AFTER, Notification, Severity};
pub use settings::{DisplaySettings, FileSettings, Settings};
pub use workspace::{NewRulesetInput, WorkspaceState};
