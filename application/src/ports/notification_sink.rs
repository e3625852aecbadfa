//! Notification port for decided documents.
//!
//! The engine only says *that* a document was decided; delivery (email,
//! in-app inbox, webhook) belongs to the adapter. Delivery is best-effort:
//! a failure here never affects the vote that caused the decision.

use approval_domain::{DocumentId, DocumentStatus, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// "Document decided" request for the requester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNotification {
    pub document_id: DocumentId,
    pub outcome: DocumentStatus,
    pub requester_id: UserId,
    pub decided_by: Option<UserId>,
    pub decided_at: DateTime<Utc>,
}

impl DecisionNotification {
    pub fn new(document_id: DocumentId, outcome: DocumentStatus, requester_id: UserId) -> Self {
        Self {
            document_id,
            outcome,
            requester_id,
            decided_by: None,
            decided_at: Utc::now(),
        }
    }

    pub fn with_decided_by(mut self, user: UserId) -> Self {
        self.decided_by = Some(user);
        self
    }
}

/// Errors on the notification side channel
#[derive(Error, Debug, Clone)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Notification delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("Notification queue unavailable: {0}")]
    QueueUnavailable(String),
}

/// Delivery hook for decided documents
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn document_decided(&self, notification: &DecisionNotification) -> Result<(), NotificationError>;
}
