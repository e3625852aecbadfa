//! Manage Config use case
//!
//! Administrator-facing read and update of the active [`ApprovalConfig`].
//! Updates are validated against the current approver roster: Error-level
//! issues reject the update, warnings are returned alongside the stored
//! config. A stored update is visible to the very next evaluation.

use crate::ports::config_store::{ConfigStore, ConfigStoreError};
use crate::ports::role_membership::{RoleLookupError, RoleMembership};
use approval_domain::{ApprovalConfig, ApprovalMode, ConfigIssue, ConfigIssueCode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ManageConfigError {
    #[error("Configuration rejected: {}", format_issues(.0))]
    Rejected(Vec<ConfigIssue>),

    #[error("Config store error: {0}")]
    Store(#[from] ConfigStoreError),

    #[error("Role lookup failed: {0}")]
    RoleLookup(#[from] RoleLookupError),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A stored configuration together with its non-fatal issues
#[derive(Debug, Clone)]
pub struct ConfigUpdate {
    pub config: ApprovalConfig,
    pub warnings: Vec<ConfigIssue>,
}

pub struct ManageConfigUseCase {
    store: Arc<dyn ConfigStore>,
    roles: Arc<dyn RoleMembership>,
}

impl ManageConfigUseCase {
    pub fn new(store: Arc<dyn ConfigStore>, roles: Arc<dyn RoleMembership>) -> Self {
        Self { store, roles }
    }

    pub async fn current(&self) -> Result<ApprovalConfig, ManageConfigError> {
        Ok(self.store.current_approval_config().await?)
    }

    /// Validate and store a new configuration (last write wins)
    pub async fn update(&self, config: ApprovalConfig) -> Result<ConfigUpdate, ManageConfigError> {
        let approvers = self.roles.count_approvers().await?;
        let issues = config.validate_for_roster(approvers);

        if issues.iter().any(ConfigIssue::is_error) {
            return Err(ManageConfigError::Rejected(issues));
        }
        for issue in &issues {
            warn!("Approval config: {}", issue);
        }

        self.store.update_approval_config(config).await?;
        info!("Approval config updated: {}", config);

        Ok(ConfigUpdate {
            config,
            warnings: issues,
        })
    }

    /// Update from raw form values; an unknown mode string is rejected
    pub async fn update_from_parts(
        &self,
        mode: &str,
        threshold_value: u32,
        comments_required: bool,
    ) -> Result<ConfigUpdate, ManageConfigError> {
        let mode: ApprovalMode = mode.parse().map_err(|_| {
            ManageConfigError::Rejected(vec![ConfigIssue::error(
                ConfigIssueCode::UnknownMode {
                    value: mode.to_string(),
                },
                format!(
                    "unknown approval mode '{}' (expected one of: {})",
                    mode,
                    ApprovalMode::ALL
                        .iter()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )])
        })?;

        self.update(
            ApprovalConfig::new(mode, threshold_value).with_comments_required(comments_required),
        )
        .await
    }
}
