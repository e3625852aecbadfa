//! Submit Vote use case
//!
//! The [`DecisionCoordinator`] owns the vote-and-decide flow for a document:
//!
//! 1. Take the document's critical section
//! 2. Check the document exists, the voter is an approver and the document
//!    is still pending
//! 3. Fetch the active [`ApprovalConfig`] (before any mutation)
//! 4. Upsert the vote through the [`VoteLedger`]
//! 5. Tally, count approvers, evaluate
//! 6. On a terminal outcome: persist with the version token, then enqueue
//!    the requester notification
//!
//! Notification is fire-and-forget. Once step 6 has persisted, nothing on
//! the notification side can undo or fail the vote.

use crate::document_locks::DocumentLocks;
use crate::ledger::{LedgerError, VoteLedger};
use crate::notification::NotificationQueue;
use crate::ports::config_store::{ConfigStore, ConfigStoreError};
use crate::ports::notification_sink::DecisionNotification;
use crate::ports::repository::{DocumentRepository, RepositoryError};
use crate::ports::role_membership::{RoleLookupError, RoleMembership};
use approval_domain::{
    ApprovalConfig, ApprovalPolicy, DecisionOutcome, Document, DocumentId, DocumentStatus,
    DomainError, UserId, Vote, VoteDecision, VoteTally,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while submitting a vote or evaluating a document
#[derive(Error, Debug)]
pub enum SubmitVoteError {
    #[error("Unknown document: {0}")]
    UnknownDocument(DocumentId),

    #[error("User {0} does not hold the approver role")]
    UnknownApprover(UserId),

    #[error("Document {document_id} is already {status}")]
    InvalidState {
        document_id: DocumentId,
        status: DocumentStatus,
    },

    #[error("Approval configuration error: {0}")]
    Configuration(#[from] ConfigStoreError),

    /// The status write lost a version race. The vote itself is already in
    /// the ledger; the document stays Pending until the next vote or an
    /// [`DecisionCoordinator::evaluate_document`] call settles it.
    #[error("Document {document_id} was modified concurrently (expected v{expected}, found v{actual})")]
    Conflict {
        document_id: DocumentId,
        expected: u64,
        actual: u64,
    },

    #[error("Repository error: {0}")]
    Repository(RepositoryError),

    #[error("Role lookup failed: {0}")]
    RoleLookup(#[from] RoleLookupError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<RepositoryError> for SubmitVoteError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::VersionConflict {
                document_id,
                expected,
                actual,
            } => SubmitVoteError::Conflict {
                document_id,
                expected,
                actual,
            },
            other => SubmitVoteError::Repository(other),
        }
    }
}

impl From<LedgerError> for SubmitVoteError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Repository(e) => e.into(),
            LedgerError::Domain(e) => SubmitVoteError::Domain(e),
        }
    }
}

/// Input for the SubmitVote use case
#[derive(Debug, Clone)]
pub struct SubmitVoteInput {
    pub document_id: DocumentId,
    pub approver_id: UserId,
    pub decision: VoteDecision,
    pub comments: Option<String>,
}

impl SubmitVoteInput {
    pub fn new(
        document_id: impl Into<DocumentId>,
        approver_id: impl Into<UserId>,
        decision: VoteDecision,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            approver_id: approver_id.into(),
            decision,
            comments: None,
        }
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// Result of evaluating a document against the active configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentEvaluation {
    pub document_id: DocumentId,
    pub tally: VoteTally,
    pub eligible_approvers: usize,
    pub config: ApprovalConfig,
    pub outcome: DecisionOutcome,
    /// Document status after the call
    pub status: DocumentStatus,
    /// Whether this call moved the document out of Pending
    pub transitioned: bool,
}

/// What a voter gets back from [`DecisionCoordinator::submit_vote`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteReceipt {
    pub vote: Vote,
    pub evaluation: DocumentEvaluation,
}

impl VoteReceipt {
    pub fn outcome(&self) -> DecisionOutcome {
        self.evaluation.outcome
    }

    pub fn status(&self) -> DocumentStatus {
        self.evaluation.status
    }

    pub fn transitioned(&self) -> bool {
        self.evaluation.transitioned
    }
}

/// Coordinates votes, policy evaluation and status transitions
pub struct DecisionCoordinator {
    ledger: VoteLedger,
    documents: Arc<dyn DocumentRepository>,
    roles: Arc<dyn RoleMembership>,
    config: Arc<dyn ConfigStore>,
    notifications: Option<NotificationQueue>,
    locks: DocumentLocks,
}

impl DecisionCoordinator {
    pub fn new(
        ledger: VoteLedger,
        documents: Arc<dyn DocumentRepository>,
        roles: Arc<dyn RoleMembership>,
        config: Arc<dyn ConfigStore>,
    ) -> Self {
        Self {
            ledger,
            documents,
            roles,
            config,
            notifications: None,
            locks: DocumentLocks::new(),
        }
    }

    /// Enqueue requester notifications on this queue after each decision
    pub fn with_notifications(mut self, queue: NotificationQueue) -> Self {
        self.notifications = Some(queue);
        self
    }

    pub fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    /// Record a vote and re-evaluate the document
    pub async fn submit_vote(&self, input: SubmitVoteInput) -> Result<VoteReceipt, SubmitVoteError> {
        let _guard = self.locks.acquire(&input.document_id).await;

        let document = self.load_document(&input.document_id).await?;
        if !self.roles.is_approver(&input.approver_id).await? {
            return Err(SubmitVoteError::UnknownApprover(input.approver_id));
        }
        if document.is_decided() {
            return Err(SubmitVoteError::InvalidState {
                document_id: document.id,
                status: document.status,
            });
        }

        let config = self.config.current_approval_config().await?;

        let vote = self
            .ledger
            .record_vote(
                &input.document_id,
                &input.approver_id,
                input.decision,
                input.comments,
            )
            .await?;

        let evaluation = self
            .evaluate_pending(document, &config, &input.approver_id)
            .await?;

        Ok(VoteReceipt { vote, evaluation })
    }

    /// Re-run the evaluation without recording a vote.
    ///
    /// Useful after the roster or the configuration changed. `triggered_by`
    /// is recorded as the decider if the document transitions. A decided
    /// document is reported as-is.
    pub async fn evaluate_document(
        &self,
        document_id: &DocumentId,
        triggered_by: &UserId,
    ) -> Result<DocumentEvaluation, SubmitVoteError> {
        let _guard = self.locks.acquire(document_id).await;

        let document = self.load_document(document_id).await?;
        let config = self.config.current_approval_config().await?;

        if document.is_decided() {
            let tally = self.ledger.tally(document_id).await?;
            let eligible_approvers = self.roles.count_approvers().await?;
            debug!("Document {} already {}, not re-evaluating", document.id, document.status);
            return Ok(DocumentEvaluation {
                document_id: document.id,
                tally,
                eligible_approvers,
                config,
                outcome: decided_outcome(document.status),
                status: document.status,
                transitioned: false,
            });
        }

        self.evaluate_pending(document, &config, triggered_by).await
    }

    async fn load_document(&self, document_id: &DocumentId) -> Result<Document, SubmitVoteError> {
        self.documents
            .find(document_id)
            .await?
            .ok_or_else(|| SubmitVoteError::UnknownDocument(document_id.clone()))
    }

    /// Evaluate a pending document and commit a terminal outcome
    async fn evaluate_pending(
        &self,
        mut document: Document,
        config: &ApprovalConfig,
        actor: &UserId,
    ) -> Result<DocumentEvaluation, SubmitVoteError> {
        let tally = self.ledger.tally(&document.id).await?;
        let eligible_approvers = self.roles.count_approvers().await?;
        let outcome = ApprovalPolicy::evaluate_tally(&tally, eligible_approvers, config);

        debug!(
            "Evaluated {}: {} {} ({})",
            document.id,
            tally.summary(eligible_approvers),
            outcome,
            config
        );

        let transitioned = if outcome.is_terminal() {
            let expected_version = document.version;
            document.decide(outcome.into(), actor.clone())?;
            self.documents.update(&document, expected_version).await?;

            info!(
                "Document {} {} by {} ({} approve, {} reject, {} approvers)",
                document.id,
                document.status,
                actor,
                tally.approve_count,
                tally.reject_count,
                eligible_approvers
            );
            self.notify_requester(&document, actor);
            true
        } else {
            false
        };

        Ok(DocumentEvaluation {
            document_id: document.id,
            tally,
            eligible_approvers,
            config: *config,
            outcome,
            status: document.status,
            transitioned,
        })
    }

    fn notify_requester(&self, document: &Document, actor: &UserId) {
        let Some(queue) = &self.notifications else {
            return;
        };

        let notification = DecisionNotification::new(
            document.id.clone(),
            document.status,
            document.requested_by.clone(),
        )
        .with_decided_by(actor.clone());

        if let Err(e) = queue.enqueue(notification) {
            warn!("Decision on {} not notified: {}", document.id, e);
        }
    }
}

fn decided_outcome(status: DocumentStatus) -> DecisionOutcome {
    match status {
        DocumentStatus::Approved => DecisionOutcome::Approved,
        DocumentStatus::Rejected => DecisionOutcome::Rejected,
        DocumentStatus::Pending => DecisionOutcome::Pending,
    }
}
