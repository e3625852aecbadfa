//! In-memory document storage with version-checked updates

use super::poisoned;
use approval_application::{DocumentRepository, RepositoryError};
use approval_domain::{Document, DocumentId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find(&self, document_id: &DocumentId) -> Result<Option<Document>, RepositoryError> {
        let documents = self.documents.read().map_err(|_| poisoned("document"))?;
        Ok(documents.get(document_id).cloned())
    }

    async fn insert(&self, document: &Document) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().map_err(|_| poisoned("document"))?;
        if documents.contains_key(&document.id) {
            return Err(RepositoryError::AlreadyExists(document.id.to_string()));
        }
        documents.insert(document.id.clone(), document.clone());
        Ok(())
    }

    async fn update(&self, document: &Document, expected_version: u64) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write().map_err(|_| poisoned("document"))?;
        let stored = documents
            .get_mut(&document.id)
            .ok_or_else(|| RepositoryError::NotFound(document.id.to_string()))?;

        // Expect previous version
        if stored.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                document_id: document.id.clone(),
                expected: expected_version,
                actual: stored.version,
            });
        }

        *stored = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approval_domain::{DocumentStatus, UserId};

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let repo = InMemoryDocumentRepository::new();
        let doc = Document::new("doc-1", "Budget", "dana").unwrap();

        repo.insert(&doc).await.unwrap();
        let err = repo.insert(&doc).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_checks_version() {
        let repo = InMemoryDocumentRepository::new();
        let doc = Document::new("doc-1", "Budget", "dana").unwrap();
        repo.insert(&doc).await.unwrap();

        let mut first = doc.clone();
        first
            .decide(DocumentStatus::Approved, UserId::new("alice"))
            .unwrap();
        repo.update(&first, 0).await.unwrap();

        let mut stale = doc.clone();
        stale
            .decide(DocumentStatus::Rejected, UserId::new("bob"))
            .unwrap();
        let err = repo.update(&stale, 0).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::VersionConflict {
                document_id: DocumentId::new("doc-1"),
                expected: 0,
                actual: 1,
            }
        );

        let stored = repo.find(&DocumentId::new("doc-1")).await.unwrap().unwrap();
        assert_eq!(stored.status, DocumentStatus::Approved);
    }

    #[tokio::test]
    async fn test_update_missing_document() {
        let repo = InMemoryDocumentRepository::new();
        let doc = Document::new("ghost", "Nothing", "dana").unwrap();

        let err = repo.update(&doc, 0).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
