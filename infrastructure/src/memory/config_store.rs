//! In-memory approval config store
//!
//! Holds the raw `[approval]` record (mode as a string) and parses it on
//! every read, so a bad mode surfaces as a configuration error at
//! evaluation time rather than silently defaulting.

use crate::config::FileApprovalConfig;
use approval_application::{ConfigStore, ConfigStoreError};
use approval_domain::{ApprovalConfig, ApprovalMode};
use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;

pub struct InMemoryConfigStore {
    record: RwLock<FileApprovalConfig>,
}

impl InMemoryConfigStore {
    pub fn new(config: ApprovalConfig) -> Self {
        Self::from_record(config.into())
    }

    /// Seed from the raw file section, unparsed
    pub fn from_record(record: FileApprovalConfig) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    fn unavailable() -> ConfigStoreError {
        ConfigStoreError::Unavailable("config lock poisoned".to_string())
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new(ApprovalConfig::default())
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn current_approval_config(&self) -> Result<ApprovalConfig, ConfigStoreError> {
        let record = self.record.read().map_err(|_| Self::unavailable())?;
        let mode: ApprovalMode = record.mode.parse()?;
        Ok(ApprovalConfig::new(mode, record.threshold).with_comments_required(record.comments_required))
    }

    async fn update_approval_config(&self, config: ApprovalConfig) -> Result<(), ConfigStoreError> {
        let mut record = self.record.write().map_err(|_| Self::unavailable())?;
        *record = config.into();
        debug!("Stored approval config: {}", config);
        Ok(())
    }
}
