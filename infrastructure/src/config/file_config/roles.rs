//! Approver roster from TOML (`[roles]` section)
//!
//! ```toml
//! [roles]
//! approvers = ["alice", "bob", "carol"]
//! ```

use approval_domain::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRolesConfig {
    /// Users holding the approver role
    pub approvers: Vec<String>,
}

impl FileRolesConfig {
    /// Distinct, non-blank approver ids
    pub fn approver_ids(&self) -> BTreeSet<UserId> {
        self.approvers
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(UserId::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approver_ids_dedupes_and_skips_blank() {
        let roles = FileRolesConfig {
            approvers: vec![
                "alice".to_string(),
                " bob ".to_string(),
                "alice".to_string(),
                "".to_string(),
            ],
        };

        let ids = roles.approver_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&UserId::new("bob")));
    }
}
