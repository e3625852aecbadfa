//! Approval modes
//!
//! The mode selects which branch of the approval policy decides a document.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Mode used to decide whether a document is approved
///
/// - `Majority`: more than half of the eligible approvers must approve (default)
/// - `Unanimous`: every eligible approver must approve
/// - `MinVotes`: at least `threshold` approvals
/// - `MinPercentage`: at least `threshold`% of eligible approvers approve
///
/// # Example
///
/// ```
/// use approval_domain::approval::ApprovalMode;
///
/// let mode: ApprovalMode = "min_votes".parse().unwrap();
/// assert_eq!(mode, ApprovalMode::MinVotes);
/// assert!(mode.uses_threshold());
/// assert!("plurality".parse::<ApprovalMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalMode {
    /// Strict majority of eligible approvers
    #[default]
    Majority,

    /// All eligible approvers must approve
    Unanimous,

    /// Raw approval count threshold
    MinVotes,

    /// Approval percentage threshold (0-100)
    MinPercentage,
}

impl ApprovalMode {
    /// All modes, in declaration order
    pub const ALL: [ApprovalMode; 4] = [
        ApprovalMode::Majority,
        ApprovalMode::Unanimous,
        ApprovalMode::MinVotes,
        ApprovalMode::MinPercentage,
    ];

    /// Canonical configuration string for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalMode::Majority => "majority",
            ApprovalMode::Unanimous => "unanimous",
            ApprovalMode::MinVotes => "min_votes",
            ApprovalMode::MinPercentage => "min_percentage",
        }
    }

    /// Whether `threshold_value` is read by this mode
    pub fn uses_threshold(&self) -> bool {
        matches!(self, ApprovalMode::MinVotes | ApprovalMode::MinPercentage)
    }
}

impl std::fmt::Display for ApprovalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApprovalMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "majority" => Ok(ApprovalMode::Majority),
            "unanimous" => Ok(ApprovalMode::Unanimous),
            "min_votes" | "minvotes" => Ok(ApprovalMode::MinVotes),
            "min_percentage" | "minpercentage" | "percentage" => Ok(ApprovalMode::MinPercentage),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("majority".parse::<ApprovalMode>().ok(), Some(ApprovalMode::Majority));
        assert_eq!("Unanimous".parse::<ApprovalMode>().ok(), Some(ApprovalMode::Unanimous));
        assert_eq!("min-votes".parse::<ApprovalMode>().ok(), Some(ApprovalMode::MinVotes));
        assert_eq!("MinVotes".parse::<ApprovalMode>().ok(), Some(ApprovalMode::MinVotes));
        assert_eq!(
            "min_percentage".parse::<ApprovalMode>().ok(),
            Some(ApprovalMode::MinPercentage)
        );
    }

    #[test]
    fn test_parse_unknown_mode_is_error() {
        let err = "weighted".parse::<ApprovalMode>().unwrap_err();
        assert_eq!(err, DomainError::UnknownMode("weighted".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for mode in ApprovalMode::ALL {
            assert_eq!(mode.to_string().parse::<ApprovalMode>().ok(), Some(mode));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ApprovalMode::MinPercentage).unwrap();
        assert_eq!(json, "\"min_percentage\"");
    }

    #[test]
    fn test_default() {
        assert_eq!(ApprovalMode::default(), ApprovalMode::Majority);
        assert!(!ApprovalMode::Majority.uses_threshold());
        assert!(ApprovalMode::MinPercentage.uses_threshold());
    }
}
