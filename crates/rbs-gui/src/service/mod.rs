//! Services for background tasks.
//!
//! These services provide async functions for use with Iced's `Task::perform` pattern.

pub mod files;

pub use files::{load_rules, save_rules};
