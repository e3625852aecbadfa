//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod approval;
mod logging;
mod notifications;
mod roles;

pub use approval::FileApprovalConfig;
pub use logging::FileLoggingConfig;
pub use notifications::FileNotificationsConfig;
pub use roles::FileRolesConfig;

use approval_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Approval policy settings
    pub approval: FileApprovalConfig,
    /// Approver roster
    pub roles: FileRolesConfig,
    /// Decision notification delivery
    pub notifications: FileNotificationsConfig,
    /// Log level and optional log directory
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks that the approval mode parses, that its threshold is sane,
    /// and that the threshold is reachable with the configured roster.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match self.approval.parse() {
            (Some(config), _) => config.validate_for_roster(self.roles.approver_ids().len()),
            (None, parse_issues) => parse_issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approval_domain::{ApprovalMode, ConfigIssueCode, Severity};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[approval]
mode = "min_votes"
threshold = 2
comments_required = true

[roles]
approvers = ["alice", "bob", "carol"]

[notifications]
timeout_ms = 1500
queue_capacity = 16
outbox = "out/decisions.jsonl"

[logging]
level = "debug"
directory = "logs"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (approval, _) = config.approval.parse();
        assert_eq!(approval.unwrap().mode, ApprovalMode::MinVotes);
        assert_eq!(config.roles.approvers.len(), 3);
        assert_eq!(config.notifications.timeout_ms, 1500);
        assert_eq!(
            config.notifications.outbox,
            Some(PathBuf::from("out/decisions.jsonl"))
        );
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_unknown_mode() {
        let config: FileConfig = toml::from_str(
            r#"
[approval]
mode = "plurality"

[roles]
approvers = ["alice"]
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_threshold_above_roster() {
        let config: FileConfig = toml::from_str(
            r#"
[approval]
mode = "min_votes"
threshold = 5

[roles]
approvers = ["alice", "bob"]
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ThresholdExceedsApprovers {
                threshold: 5,
                approvers: 2
            }
        );
    }

    #[test]
    fn test_validate_empty_roster_warns() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::NoApprovers);
    }
}
