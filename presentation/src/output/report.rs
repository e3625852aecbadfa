//! Serializable views of command results
//!
//! The formatters render these; they carry no behavior of their own.

use approval_application::{DocumentEvaluation, VoteReceipt};
use approval_domain::{
    ApprovalConfig, ApprovalPolicy, ConfigIssue, DecisionOutcome, PolicyInput, Severity,
};
use serde::Serialize;

/// Result of a stateless `evaluate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    pub config: ApprovalConfig,
    pub approve_count: usize,
    pub reject_count: usize,
    pub eligible_approvers: usize,
    pub outcome: DecisionOutcome,
    /// Approvals that would approve, or `None` when unreachable
    pub approvals_needed: Option<usize>,
}

impl PolicyReport {
    pub fn evaluate(config: ApprovalConfig, input: PolicyInput) -> Self {
        Self {
            config,
            approve_count: input.approve_count,
            reject_count: input.reject_count,
            eligible_approvers: input.total_eligible_approvers,
            outcome: ApprovalPolicy::evaluate(&input, &config),
            approvals_needed: ApprovalPolicy::min_approvals_needed(
                &config,
                input.total_eligible_approvers,
            ),
        }
    }
}

/// A configuration issue as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueView {
    pub severity: &'static str,
    pub message: String,
}

impl From<&ConfigIssue> for IssueView {
    fn from(issue: &ConfigIssue) -> Self {
        Self {
            severity: match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            message: issue.message.clone(),
        }
    }
}

/// Effective configuration for `config`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigReport {
    /// `None` when the configured mode does not parse
    pub approval: Option<ApprovalConfig>,
    pub approvers: Vec<String>,
    pub notification_timeout_ms: u64,
    pub notification_queue_capacity: usize,
    pub outbox: Option<String>,
    pub issues: Vec<IssueView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// One replayed simulation step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepRecord {
    Vote {
        step: usize,
        receipt: VoteReceipt,
    },
    Evaluate {
        step: usize,
        by: String,
        evaluation: DocumentEvaluation,
    },
    Configure {
        step: usize,
        config: ApprovalConfig,
        warnings: Vec<IssueView>,
    },
    Roster {
        step: usize,
        user: String,
        granted: bool,
        approvers: usize,
    },
    Failed {
        step: usize,
        action: String,
        error: String,
    },
}

impl StepRecord {
    pub fn step(&self) -> usize {
        match self {
            StepRecord::Vote { step, .. }
            | StepRecord::Evaluate { step, .. }
            | StepRecord::Configure { step, .. }
            | StepRecord::Roster { step, .. }
            | StepRecord::Failed { step, .. } => *step,
        }
    }
}

/// Full `simulate` run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub document_id: String,
    pub requested_by: String,
    pub steps: Vec<StepRecord>,
    pub final_status: approval_domain::DocumentStatus,
    pub notifications_delivered: usize,
    pub notifications_failed: usize,
}
