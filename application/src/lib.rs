//! Application layer for approval-quorum
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod document_locks;
pub mod ledger;
pub mod notification;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::NotificationParams;
pub use ledger::{LedgerError, VoteLedger};
pub use notification::{DispatchStats, NotificationDispatcher, NotificationQueue};
pub use ports::{
    config_store::{ConfigStore, ConfigStoreError},
    notification_sink::{DecisionNotification, NotificationError, NotificationSink},
    repository::{DocumentRepository, RepositoryError, VoteRepository},
    role_membership::{RoleLookupError, RoleMembership},
};
pub use use_cases::manage_config::{ConfigUpdate, ManageConfigError, ManageConfigUseCase};
pub use use_cases::open_document::{OpenDocumentError, OpenDocumentInput, OpenDocumentUseCase};
pub use use_cases::submit_vote::{
    DecisionCoordinator, DocumentEvaluation, SubmitVoteError, SubmitVoteInput, VoteReceipt,
};
