//! Open Document use case
//!
//! Registers a new document for approval. Every document starts Pending.

use crate::ports::repository::{DocumentRepository, RepositoryError};
use approval_domain::{Document, DocumentId, DomainError, UserId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum OpenDocumentError {
    #[error("Document {0} already exists")]
    Duplicate(DocumentId),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone)]
pub struct OpenDocumentInput {
    pub document_id: DocumentId,
    pub title: String,
    pub requested_by: UserId,
}

impl OpenDocumentInput {
    pub fn new(
        document_id: impl Into<DocumentId>,
        title: impl Into<String>,
        requested_by: impl Into<UserId>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            title: title.into(),
            requested_by: requested_by.into(),
        }
    }
}

pub struct OpenDocumentUseCase {
    documents: Arc<dyn DocumentRepository>,
}

impl OpenDocumentUseCase {
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, input: OpenDocumentInput) -> Result<Document, OpenDocumentError> {
        let document = Document::new(input.document_id, input.title, input.requested_by)?;

        match self.documents.insert(&document).await {
            Ok(()) => {}
            Err(RepositoryError::AlreadyExists(_)) => {
                return Err(OpenDocumentError::Duplicate(document.id));
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            "Opened document {} ({:?}) for {}",
            document.id, document.title, document.requested_by
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::submit_vote::tests::MemoryDocuments;
    use approval_domain::DocumentStatus;

    #[tokio::test]
    async fn test_open_creates_pending_document() {
        let docs = Arc::new(MemoryDocuments::default());
        let uc = OpenDocumentUseCase::new(docs.clone());

        let doc = uc
            .execute(OpenDocumentInput::new("doc-9", "Vendor contract", "dana"))
            .await
            .unwrap();

        assert_eq!(doc.status, DocumentStatus::Pending);
        assert_eq!(doc.version, 0);
        assert_eq!(docs.get("doc-9").requested_by, UserId::new("dana"));
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let docs = Arc::new(MemoryDocuments::default());
        let uc = OpenDocumentUseCase::new(docs);

        uc.execute(OpenDocumentInput::new("doc-9", "First", "dana"))
            .await
            .unwrap();
        let err = uc
            .execute(OpenDocumentInput::new("doc-9", "Second", "erin"))
            .await
            .unwrap_err();

        assert!(matches!(err, OpenDocumentError::Duplicate(id) if id.as_str() == "doc-9"));
    }

    #[tokio::test]
    async fn test_empty_requester_is_rejected() {
        let uc = OpenDocumentUseCase::new(Arc::new(MemoryDocuments::default()));

        let err = uc
            .execute(OpenDocumentInput::new("doc-9", "Untitled", "  "))
            .await
            .unwrap_err();

        assert!(matches!(err, OpenDocumentError::Domain(DomainError::EmptyIdentifier(_))));
    }
}
