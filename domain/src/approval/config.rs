//! Approval configuration value
//!
//! A single [`ApprovalConfig`] is active at any time. It is read fresh for
//! every evaluation and passed explicitly to the policy; nothing caches it.

use super::mode::ApprovalMode;
use crate::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Active approval configuration
///
/// `threshold_value` is a raw approval count for [`ApprovalMode::MinVotes`]
/// and a percentage (0-100) for [`ApprovalMode::MinPercentage`]. The other
/// modes ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApprovalConfig {
    pub mode: ApprovalMode,
    pub threshold_value: u32,
    /// Whether voters must leave a comment (enforced by the voting surface)
    pub comments_required: bool,
}

impl ApprovalConfig {
    pub fn new(mode: ApprovalMode, threshold_value: u32) -> Self {
        Self {
            mode,
            threshold_value,
            comments_required: false,
        }
    }

    pub fn majority() -> Self {
        Self::new(ApprovalMode::Majority, 0)
    }

    pub fn unanimous() -> Self {
        Self::new(ApprovalMode::Unanimous, 0)
    }

    pub fn min_votes(count: u32) -> Self {
        Self::new(ApprovalMode::MinVotes, count)
    }

    pub fn min_percentage(percent: u32) -> Self {
        Self::new(ApprovalMode::MinPercentage, percent)
    }

    pub fn with_comments_required(mut self, required: bool) -> Self {
        self.comments_required = required;
        self
    }

    /// Human-readable description of the rule
    pub fn description(&self) -> String {
        match self.mode {
            ApprovalMode::Majority => "majority (more than half of approvers)".to_string(),
            ApprovalMode::Unanimous => "unanimous (all approvers must approve)".to_string(),
            ApprovalMode::MinVotes => format!("at least {} approvals", self.threshold_value),
            ApprovalMode::MinPercentage => {
                format!("at least {}% of approvers", self.threshold_value)
            }
        }
    }

    /// Check threshold sanity for the configured mode.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.mode.uses_threshold() {
            return issues;
        }

        if self.threshold_value == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroThreshold,
                format!(
                    "{} threshold is 0: every document is approved on its first evaluation",
                    self.mode
                ),
            ));
        }

        if self.mode == ApprovalMode::MinPercentage && self.threshold_value > 100 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ThresholdOutOfRange {
                    value: self.threshold_value,
                },
                format!(
                    "min_percentage threshold {} is above 100: documents can only be rejected",
                    self.threshold_value
                ),
            ));
        }

        issues
    }

    /// [`validate`](Self::validate) plus checks against an approver roster
    /// of the given size.
    pub fn validate_for_roster(&self, approvers: usize) -> Vec<ConfigIssue> {
        let mut issues = self.validate();

        if approvers == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoApprovers,
                "no users hold the approver role: every document stays pending",
            ));
        } else if self.mode == ApprovalMode::MinVotes && self.threshold_value as usize > approvers {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ThresholdExceedsApprovers {
                    threshold: self.threshold_value,
                    approvers,
                },
                format!(
                    "min_votes threshold {} exceeds the {} approvers: documents can only be rejected",
                    self.threshold_value, approvers
                ),
            ));
        }

        issues
    }
}

impl std::fmt::Display for ApprovalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApprovalConfig::default();
        assert_eq!(config.mode, ApprovalMode::Majority);
        assert_eq!(config.threshold_value, 0);
        assert!(!config.comments_required);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_description() {
        assert_eq!(
            ApprovalConfig::min_votes(3).to_string(),
            "at least 3 approvals"
        );
        assert_eq!(
            ApprovalConfig::min_percentage(60).to_string(),
            "at least 60% of approvers"
        );
    }

    #[test]
    fn test_threshold_ignored_for_majority() {
        let config = ApprovalConfig::new(ApprovalMode::Majority, 0);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_zero_threshold_warns() {
        let issues = ApprovalConfig::min_votes(0).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroThreshold);
    }

    #[test]
    fn test_percentage_over_100_warns() {
        let issues = ApprovalConfig::min_percentage(120).validate();
        assert!(issues.iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::ThresholdOutOfRange { value: 120 }
        )));
    }

    #[test]
    fn test_roster_checks() {
        assert!(ApprovalConfig::min_votes(3).validate_for_roster(3).is_empty());

        let issues = ApprovalConfig::min_votes(4).validate_for_roster(3);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ThresholdExceedsApprovers {
                threshold: 4,
                approvers: 3
            }
        );

        let issues = ApprovalConfig::majority().validate_for_roster(0);
        assert_eq!(issues[0].code, ConfigIssueCode::NoApprovers);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ApprovalConfig =
            serde_json::from_str(r#"{"mode": "unanimous", "comments_required": true}"#).unwrap();
        assert_eq!(config.mode, ApprovalMode::Unanimous);
        assert_eq!(config.threshold_value, 0);
        assert!(config.comments_required);
    }
}
