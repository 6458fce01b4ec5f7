//! Ruleset data model for Ruleset Builder Studio.
//!
//! A document is a [`RulesetCollection`]: named [`Ruleset`]s, each holding an
//! ordered list of [`Rule`]s, each rule holding an ordered list of
//! [`Condition`]s. Records are plain data; editing happens by replacing whole
//! records, and validity is only checked when a collection is exported
//! (see [`validate_rule`]).

pub mod condition;
pub mod enums;
pub mod error;
mod lenient;
pub mod rule;
pub mod validation;

pub use condition::{Action, Condition, ErrorMessage};
pub use enums::{ActionType, ErrorType};
pub use error::RuleValidationError;
pub use rule::{Rule, Ruleset, RulesetCollection};
pub use validation::{RuleIssue, validate_rule, validate_rules};
