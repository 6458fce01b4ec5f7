//! Ruleset Builder Studio - GUI Library
//!
//! Desktop editor for field validation rulesets: named rulesets of rules,
//! each rule a field name plus conditions with an error descriptor and an
//! optional corrective action. Rulesets are loaded from and saved to JSON.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
