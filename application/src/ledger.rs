//! Vote ledger
//!
//! Holds one vote per (document, approver) pair on top of a
//! [`VoteRepository`]. Recording a second vote for the same pair revises the
//! first in place; duplicates are never an error.
//!
//! The ledger does no locking of its own: the caller (the decision
//! coordinator) serializes writers per document.

use crate::ports::repository::{RepositoryError, VoteRepository};
use approval_domain::{DocumentId, DomainError, UserId, Vote, VoteDecision, VoteTally};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Clone)]
pub struct VoteLedger {
    votes: Arc<dyn VoteRepository>,
}

impl VoteLedger {
    pub fn new(votes: Arc<dyn VoteRepository>) -> Self {
        Self { votes }
    }

    /// Insert or overwrite the vote for (document, approver)
    pub async fn record_vote(
        &self,
        document_id: &DocumentId,
        approver_id: &UserId,
        decision: VoteDecision,
        comments: Option<String>,
    ) -> Result<Vote, LedgerError> {
        let vote = match self.votes.find(document_id, approver_id).await? {
            Some(mut existing) => {
                debug!(
                    "Revising vote of {} on {}: {} -> {}",
                    approver_id, document_id, existing.decision, decision
                );
                existing.revise(decision, comments);
                existing
            }
            None => {
                debug!("Recording vote of {} on {}: {}", approver_id, document_id, decision);
                Vote::new(document_id.clone(), approver_id.clone(), decision, comments)?
            }
        };

        self.votes.save(&vote).await?;
        Ok(vote)
    }

    /// All active votes for a document
    pub async fn votes_for(&self, document_id: &DocumentId) -> Result<Vec<Vote>, RepositoryError> {
        self.votes.find_by_document(document_id).await
    }

    pub async fn has_voted(
        &self,
        document_id: &DocumentId,
        approver_id: &UserId,
    ) -> Result<bool, RepositoryError> {
        Ok(self.votes.find(document_id, approver_id).await?.is_some())
    }

    /// Approve/reject counts for a document
    pub async fn tally(&self, document_id: &DocumentId) -> Result<VoteTally, RepositoryError> {
        let votes = self.votes_for(document_id).await?;
        Ok(VoteTally::from_votes(&votes))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// HashMap-backed vote store shared by the application tests
    #[derive(Default)]
    pub(crate) struct MemoryVotes {
        votes: Mutex<HashMap<(DocumentId, UserId), Vote>>,
    }

    impl MemoryVotes {
        pub(crate) fn len(&self) -> usize {
            self.votes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl VoteRepository for MemoryVotes {
        async fn find(
            &self,
            document_id: &DocumentId,
            approver_id: &UserId,
        ) -> Result<Option<Vote>, RepositoryError> {
            Ok(self
                .votes
                .lock()
                .unwrap()
                .get(&(document_id.clone(), approver_id.clone()))
                .cloned())
        }

        async fn find_by_document(
            &self,
            document_id: &DocumentId,
        ) -> Result<Vec<Vote>, RepositoryError> {
            Ok(self
                .votes
                .lock()
                .unwrap()
                .values()
                .filter(|v| &v.document_id == document_id)
                .cloned()
                .collect())
        }

        async fn save(&self, vote: &Vote) -> Result<(), RepositoryError> {
            self.votes.lock().unwrap().insert(
                (vote.document_id.clone(), vote.approver_id.clone()),
                vote.clone(),
            );
            Ok(())
        }
    }

    fn ledger() -> (VoteLedger, Arc<MemoryVotes>) {
        let store = Arc::new(MemoryVotes::default());
        (VoteLedger::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_record_new_vote() {
        let (ledger, store) = ledger();
        let doc = DocumentId::new("doc-1");
        let alice = UserId::new("alice");

        let vote = ledger
            .record_vote(&doc, &alice, VoteDecision::Approve, Some("LGTM".to_string()))
            .await
            .unwrap();

        assert_eq!(vote.decision, VoteDecision::Approve);
        assert_eq!(vote.comments.as_deref(), Some("LGTM"));
        assert_eq!(store.len(), 1);
        assert!(ledger.has_voted(&doc, &alice).await.unwrap());
        assert!(!ledger.has_voted(&doc, &UserId::new("bob")).await.unwrap());
    }

    #[tokio::test]
    async fn test_revote_overwrites_instead_of_duplicating() {
        let (ledger, store) = ledger();
        let doc = DocumentId::new("doc-1");
        let alice = UserId::new("alice");

        ledger
            .record_vote(&doc, &alice, VoteDecision::Reject, Some("typo".to_string()))
            .await
            .unwrap();
        let revised = ledger
            .record_vote(&doc, &alice, VoteDecision::Approve, None)
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(revised.decision, VoteDecision::Approve);
        assert!(revised.comments.is_none());

        let tally = ledger.tally(&doc).await.unwrap();
        assert_eq!(tally, VoteTally::new(1, 0));
    }

    #[tokio::test]
    async fn test_same_vote_twice_is_idempotent() {
        let (ledger, _store) = ledger();
        let doc = DocumentId::new("doc-1");

        for _ in 0..2 {
            ledger
                .record_vote(&doc, &UserId::new("alice"), VoteDecision::Approve, None)
                .await
                .unwrap();
        }

        let votes = ledger.votes_for(&doc).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(ledger.tally(&doc).await.unwrap(), VoteTally::new(1, 0));
    }

    #[tokio::test]
    async fn test_votes_are_scoped_per_document() {
        let (ledger, _store) = ledger();
        let alice = UserId::new("alice");

        ledger
            .record_vote(&DocumentId::new("doc-1"), &alice, VoteDecision::Approve, None)
            .await
            .unwrap();
        ledger
            .record_vote(&DocumentId::new("doc-2"), &alice, VoteDecision::Reject, None)
            .await
            .unwrap();

        assert_eq!(
            ledger.tally(&DocumentId::new("doc-1")).await.unwrap(),
            VoteTally::new(1, 0)
        );
        assert_eq!(
            ledger.tally(&DocumentId::new("doc-2")).await.unwrap(),
            VoteTally::new(0, 1)
        );
    }
}
