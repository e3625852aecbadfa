//! Infrastructure layer for approval-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod memory;
pub mod notification;
pub mod simulation;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApprovalConfig, FileConfig, FileLoggingConfig, FileNotificationsConfig,
    FileRolesConfig,
};
pub use memory::{
    InMemoryConfigStore, InMemoryDocumentRepository, InMemoryVoteRepository, StaticRoleMembership,
};
pub use notification::{JsonlNotificationSink, TracingNotificationSink};
pub use simulation::{ScriptDocument, ScriptError, ScriptStep, SimulationScript};
