//! Outcome of a policy evaluation

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a document's votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionOutcome {
    /// Approval threshold reached
    Approved,
    /// Approval is no longer reachable (or rejection threshold reached)
    Rejected,
    /// Not decided yet
    Pending,
}

impl DecisionOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, DecisionOutcome::Approved)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DecisionOutcome::Rejected)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DecisionOutcome::Pending)
    }

    /// Approved and Rejected end the review
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

impl std::fmt::Display for DecisionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionOutcome::Approved => write!(f, "Approved"),
            DecisionOutcome::Rejected => write!(f, "Rejected"),
            DecisionOutcome::Pending => write!(f, "Pending"),
        }
    }
}
