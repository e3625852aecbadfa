//! Storage ports for votes and documents
//!
//! The backing store is an external collaborator. These traits define only
//! what the decision engine needs: vote lookup and replace-by-pair, document
//! lookup, and a version-checked document update.

use approval_domain::{Document, DocumentId, UserId, Vote};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur in storage adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Version conflict on document {document_id}: expected v{expected}, found v{actual}")]
    VersionConflict {
        document_id: DocumentId,
        expected: u64,
        actual: u64,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Vote storage keyed by (document, approver)
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the active vote for a (document, approver) pair
    async fn find(
        &self,
        document_id: &DocumentId,
        approver_id: &UserId,
    ) -> Result<Option<Vote>, RepositoryError>;

    /// All active votes for a document, in no particular order
    async fn find_by_document(&self, document_id: &DocumentId) -> Result<Vec<Vote>, RepositoryError>;

    /// Store a vote, replacing any vote with the same (document, approver) pair
    async fn save(&self, vote: &Vote) -> Result<(), RepositoryError>;
}

/// Document storage with optimistic concurrency
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find(&self, document_id: &DocumentId) -> Result<Option<Document>, RepositoryError>;

    /// Store a new document; fails with `AlreadyExists` on a duplicate id
    async fn insert(&self, document: &Document) -> Result<(), RepositoryError>;

    /// Replace a stored document if its stored version equals `expected_version`.
    ///
    /// Returns `VersionConflict` when another writer got there first.
    async fn update(
        &self,
        document: &Document,
        expected_version: u64,
    ) -> Result<(), RepositoryError>;
}
