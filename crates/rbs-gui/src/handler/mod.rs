//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and gets
//! the full application state:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Workspace(msg) => WorkspaceHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! - `workspace` - ruleset and rule messages
//! - `files` - open/save dialogs and the import/export round trip
//! - `editor` - pure update functions for the rule and condition editors

pub mod editor;
pub mod files;
mod workspace;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use workspace::WorkspaceHandler;

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// Returns `Task::none()` when there is no async follow-up work.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
