//! Confirmation step for destructive actions.
//!
//! A deletion request moves the machine from `Idle` to `Pending`; the modal
//! then resolves it with [`Confirmation::confirm`] (returning the action to
//! run) or [`Confirmation::cancel`] (dropping it). Nothing is deleted while
//! a request is pending.

/// Destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Remove the named ruleset from the collection.
    DeleteRuleset { name: String },
    /// Remove the rule at `index` from the selected ruleset.
    DeleteRule { index: usize },
}

impl PendingAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DeleteRuleset { .. } => "Delete RuleSet",
            Self::DeleteRule { .. } => "Delete Rule",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::DeleteRuleset { name } => {
                format!("Are you sure you want to delete the ruleset \"{name}\"?")
            }
            Self::DeleteRule { .. } => "Are you sure you want to delete this rule?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Confirmation {
    #[default]
    Idle,
    Pending(PendingAction),
}

impl Confirmation {
    /// Ask for confirmation. A request made while another is pending
    /// replaces it.
    pub fn request(&mut self, action: PendingAction) {
        *self = Self::Pending(action);
    }

    /// Resolve as confirmed, returning the action to perform.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        match std::mem::take(self) {
            Self::Pending(action) => Some(action),
            Self::Idle => None,
        }
    }

    /// Resolve as cancelled.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        match self {
            Self::Pending(action) => Some(action),
            Self::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }
}
