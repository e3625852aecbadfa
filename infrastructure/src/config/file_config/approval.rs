//! Approval policy configuration from TOML (`[approval]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [approval]
//! mode = "min_percentage"     # majority | unanimous | min_votes | min_percentage
//! threshold = 60
//! comments_required = false
//! ```

use approval_domain::{ApprovalConfig, ApprovalMode, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw `[approval]` section
///
/// `mode` stays a string here so that an unknown value can be reported as a
/// configuration error instead of failing deserialization of the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApprovalConfig {
    pub mode: String,
    pub threshold: u32,
    pub comments_required: bool,
}

impl Default for FileApprovalConfig {
    fn default() -> Self {
        Self {
            mode: ApprovalMode::default().as_str().to_string(),
            threshold: 0,
            comments_required: false,
        }
    }
}

impl From<ApprovalConfig> for FileApprovalConfig {
    fn from(config: ApprovalConfig) -> Self {
        Self {
            mode: config.mode.as_str().to_string(),
            threshold: config.threshold_value,
            comments_required: config.comments_required,
        }
    }
}

impl FileApprovalConfig {
    /// Parse into an [`ApprovalConfig`]; an unknown mode yields `None` and
    /// an Error-severity issue, never a fallback mode.
    pub fn parse(&self) -> (Option<ApprovalConfig>, Vec<ConfigIssue>) {
        match self.mode.parse::<ApprovalMode>() {
            Ok(mode) => {
                let config = ApprovalConfig::new(mode, self.threshold)
                    .with_comments_required(self.comments_required);
                let issues = config.validate();
                (Some(config), issues)
            }
            Err(_) => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::UnknownMode {
                        value: self.mode.clone(),
                    },
                    format!(
                        "approval.mode: unknown value '{}' (expected majority, unanimous, min_votes or min_percentage)",
                        self.mode
                    ),
                );
                (None, vec![issue])
            }
        }
    }
}
