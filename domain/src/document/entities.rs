//! Document entity and its status state machine

use crate::approval::DecisionOutcome;
use crate::core::error::DomainError;
use crate::core::ids::{DocumentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a document
///
/// ```text
/// Pending ──▶ Approved
///    │
///    └─────▶ Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DocumentStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
        }
    }
}

impl From<DecisionOutcome> for DocumentStatus {
    fn from(outcome: DecisionOutcome) -> Self {
        match outcome {
            DecisionOutcome::Approved => DocumentStatus::Approved,
            DecisionOutcome::Rejected => DocumentStatus::Rejected,
            DecisionOutcome::Pending => DocumentStatus::Pending,
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A document submitted for approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub requested_by: UserId,
    pub status: DocumentStatus,
    /// Voter whose vote caused the terminal transition
    pub decided_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
    /// Optimistic-concurrency token, bumped on every status change
    pub version: u64,
}

impl Document {
    /// Create a pending document
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        requested_by: impl Into<UserId>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let requested_by = requested_by.into();
        if id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyIdentifier("document"));
        }
        if requested_by.as_str().trim().is_empty() {
            return Err(DomainError::EmptyIdentifier("requester"));
        }

        Ok(Self {
            id,
            title: title.into(),
            requested_by,
            status: DocumentStatus::Pending,
            decided_by: None,
            created_at: Utc::now(),
            decided_at: None,
            version: 0,
        })
    }

    pub fn is_decided(&self) -> bool {
        self.status.is_terminal()
    }

    /// Move a pending document to a terminal status.
    ///
    /// Fails for a document that is already decided or when `status` is
    /// `Pending`; there is no way back out of a terminal status.
    pub fn decide(&mut self, status: DocumentStatus, actor: UserId) -> Result<(), DomainError> {
        if self.status.is_terminal() || !status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }

        self.status = status;
        self.decided_by = Some(actor);
        self.decided_at = Some(Utc::now());
        self.version += 1;
        Ok(())
    }
}
