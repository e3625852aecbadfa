//! Approval policy
//!
//! Pure evaluation of a vote tally against the active [`ApprovalConfig`].
//! The policy keeps no state between calls: everything it needs is
//! re-derived from the current vote set and approver count.
//!
//! Thresholds are compared by cross-multiplication so that boundaries such
//! as "3 of 5 approvers reaches 60%" hold exactly.

use super::config::ApprovalConfig;
use super::mode::ApprovalMode;
use super::outcome::DecisionOutcome;
use super::vote::VoteTally;
use serde::{Deserialize, Serialize};

/// Counts the policy decides on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyInput {
    pub approve_count: usize,
    pub reject_count: usize,
    pub total_votes_cast: usize,
    /// Size of the approver role at evaluation time (the quorum)
    pub total_eligible_approvers: usize,
}

impl PolicyInput {
    pub fn new(approve_count: usize, reject_count: usize, total_eligible_approvers: usize) -> Self {
        Self {
            approve_count,
            reject_count,
            total_votes_cast: approve_count + reject_count,
            total_eligible_approvers,
        }
    }

    pub fn from_tally(tally: &VoteTally, total_eligible_approvers: usize) -> Self {
        Self::new(
            tally.approve_count,
            tally.reject_count,
            total_eligible_approvers,
        )
    }

    /// Every eligible approver has voted
    pub fn participation_complete(&self) -> bool {
        self.total_votes_cast == self.total_eligible_approvers
    }

    /// Approval percentage of the quorum (0.0 when there are no approvers)
    pub fn approval_percentage(&self) -> f64 {
        if self.total_eligible_approvers == 0 {
            0.0
        } else {
            self.approve_count as f64 / self.total_eligible_approvers as f64 * 100.0
        }
    }
}

/// Decides documents from vote counts
///
/// # Example
///
/// ```
/// use approval_domain::approval::{ApprovalConfig, ApprovalPolicy, DecisionOutcome, PolicyInput};
///
/// let config = ApprovalConfig::majority();
/// // 3 approvers: need more than 1.5 approvals
/// assert_eq!(ApprovalPolicy::evaluate(&PolicyInput::new(2, 0, 3), &config), DecisionOutcome::Approved);
/// assert_eq!(ApprovalPolicy::evaluate(&PolicyInput::new(1, 1, 3), &config), DecisionOutcome::Pending);
/// ```
pub struct ApprovalPolicy;

impl ApprovalPolicy {
    /// Evaluate the counts under the configured mode
    pub fn evaluate(input: &PolicyInput, config: &ApprovalConfig) -> DecisionOutcome {
        // A quorum of zero is never satisfied
        if input.total_eligible_approvers == 0 {
            return DecisionOutcome::Pending;
        }

        let eligible = input.total_eligible_approvers as u64;
        let approve = input.approve_count as u64;
        let reject = input.reject_count as u64;
        let threshold = u64::from(config.threshold_value);

        match config.mode {
            ApprovalMode::Majority => {
                // approve > eligible / 2, reject >= eligible / 2
                if approve * 2 > eligible {
                    DecisionOutcome::Approved
                } else if reject * 2 >= eligible {
                    DecisionOutcome::Rejected
                } else {
                    DecisionOutcome::Pending
                }
            }
            ApprovalMode::Unanimous => {
                if approve == eligible {
                    DecisionOutcome::Approved
                } else if reject > 0 {
                    DecisionOutcome::Rejected
                } else {
                    DecisionOutcome::Pending
                }
            }
            ApprovalMode::MinVotes => {
                if approve >= threshold {
                    DecisionOutcome::Approved
                } else if input.participation_complete() {
                    DecisionOutcome::Rejected
                } else {
                    DecisionOutcome::Pending
                }
            }
            ApprovalMode::MinPercentage => {
                // approve / eligible * 100 >= threshold
                if approve * 100 >= threshold * eligible {
                    DecisionOutcome::Approved
                } else if input.participation_complete() {
                    DecisionOutcome::Rejected
                } else {
                    DecisionOutcome::Pending
                }
            }
        }
    }

    /// Evaluate a tally against a live approver count
    pub fn evaluate_tally(
        tally: &VoteTally,
        total_eligible_approvers: usize,
        config: &ApprovalConfig,
    ) -> DecisionOutcome {
        Self::evaluate(
            &PolicyInput::from_tally(tally, total_eligible_approvers),
            config,
        )
    }

    /// Minimum approvals that would approve a document, or `None` when no
    /// number of approvals can (no approvers, or a threshold above the roster)
    pub fn min_approvals_needed(config: &ApprovalConfig, eligible: usize) -> Option<usize> {
        if eligible == 0 {
            return None;
        }

        let needed = match config.mode {
            ApprovalMode::Majority => eligible / 2 + 1,
            ApprovalMode::Unanimous => eligible,
            ApprovalMode::MinVotes => config.threshold_value as usize,
            ApprovalMode::MinPercentage => {
                (config.threshold_value as usize * eligible).div_ceil(100)
            }
        };

        (needed <= eligible).then_some(needed)
    }
}
