//! Approval configuration port
//!
//! Exactly one [`ApprovalConfig`] is active. Callers read it at the start of
//! each evaluation and never cache it, so an administrator's update takes
//! effect on the next vote (last write wins).

use approval_domain::{ApprovalConfig, DomainError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigStoreError {
    #[error("Invalid approval configuration: {0}")]
    Invalid(#[from] DomainError),

    #[error("Config store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// The configuration to evaluate with right now
    async fn current_approval_config(&self) -> Result<ApprovalConfig, ConfigStoreError>;

    /// Replace the active configuration
    async fn update_approval_config(&self, config: ApprovalConfig) -> Result<(), ConfigStoreError>;
}
