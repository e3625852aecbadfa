//! In-memory vote storage keyed by (document, approver)

use super::poisoned;
use approval_application::{RepositoryError, VoteRepository};
use approval_domain::{DocumentId, UserId, Vote};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryVoteRepository {
    votes: RwLock<HashMap<DocumentId, HashMap<UserId, Vote>>>,
}

impl InMemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored votes across all documents
    pub fn count(&self) -> usize {
        self.votes
            .read()
            .map(|votes| votes.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }
}

#[async_trait]
impl VoteRepository for InMemoryVoteRepository {
    async fn find(
        &self,
        document_id: &DocumentId,
        approver_id: &UserId,
    ) -> Result<Option<Vote>, RepositoryError> {
        let votes = self.votes.read().map_err(|_| poisoned("vote"))?;
        Ok(votes
            .get(document_id)
            .and_then(|by_approver| by_approver.get(approver_id))
            .cloned())
    }

    async fn find_by_document(&self, document_id: &DocumentId) -> Result<Vec<Vote>, RepositoryError> {
        let votes = self.votes.read().map_err(|_| poisoned("vote"))?;
        let mut found: Vec<Vote> = votes
            .get(document_id)
            .map(|by_approver| by_approver.values().cloned().collect())
            .unwrap_or_default();
        found.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(found)
    }

    async fn save(&self, vote: &Vote) -> Result<(), RepositoryError> {
        let mut votes = self.votes.write().map_err(|_| poisoned("vote"))?;
        votes
            .entry(vote.document_id.clone())
            .or_default()
            .insert(vote.approver_id.clone(), vote.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approval_domain::VoteDecision;

    fn vote(doc: &str, who: &str, decision: VoteDecision) -> Vote {
        Vote::new(doc, who, decision, None).unwrap()
    }

    #[tokio::test]
    async fn test_save_replaces_by_pair() {
        let repo = InMemoryVoteRepository::new();

        repo.save(&vote("doc-1", "alice", VoteDecision::Reject))
            .await
            .unwrap();
        repo.save(&vote("doc-1", "alice", VoteDecision::Approve))
            .await
            .unwrap();
        repo.save(&vote("doc-2", "alice", VoteDecision::Reject))
            .await
            .unwrap();

        assert_eq!(repo.count(), 2);
        let found = repo
            .find(&DocumentId::new("doc-1"), &UserId::new("alice"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.decision, VoteDecision::Approve);
    }

    #[tokio::test]
    async fn test_find_by_document_is_scoped() {
        let repo = InMemoryVoteRepository::new();
        repo.save(&vote("doc-1", "alice", VoteDecision::Approve))
            .await
            .unwrap();
        repo.save(&vote("doc-1", "bob", VoteDecision::Reject))
            .await
            .unwrap();
        repo.save(&vote("doc-2", "carol", VoteDecision::Approve))
            .await
            .unwrap();

        let votes = repo
            .find_by_document(&DocumentId::new("doc-1"))
            .await
            .unwrap();
        assert_eq!(votes.len(), 2);
        assert!(
            repo.find_by_document(&DocumentId::new("doc-3"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
