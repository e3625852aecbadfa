//! Approver roster held in memory, seeded from `[roles]`

use approval_application::{RoleLookupError, RoleMembership};
use approval_domain::UserId;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::RwLock;

#[derive(Default)]
pub struct StaticRoleMembership {
    approvers: RwLock<BTreeSet<UserId>>,
}

impl StaticRoleMembership {
    pub fn new(approvers: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            approvers: RwLock::new(approvers.into_iter().collect()),
        }
    }

    /// Give a user the approver role; `Ok(false)` if they already had it
    pub fn grant(&self, user_id: UserId) -> Result<bool, RoleLookupError> {
        self.approvers
            .write()
            .map(|mut approvers| approvers.insert(user_id))
            .map_err(|_| poisoned())
    }

    /// Take the approver role away; `Ok(false)` if they did not have it
    pub fn revoke(&self, user_id: &UserId) -> Result<bool, RoleLookupError> {
        self.approvers
            .write()
            .map(|mut approvers| approvers.remove(user_id))
            .map_err(|_| poisoned())
    }

    pub fn approvers(&self) -> Result<Vec<UserId>, RoleLookupError> {
        self.approvers
            .read()
            .map(|approvers| approvers.iter().cloned().collect())
            .map_err(|_| poisoned())
    }
}

fn poisoned() -> RoleLookupError {
    RoleLookupError::Unavailable("roster lock poisoned".to_string())
}

#[async_trait]
impl RoleMembership for StaticRoleMembership {
    async fn count_approvers(&self) -> Result<usize, RoleLookupError> {
        self.approvers
            .read()
            .map(|approvers| approvers.len())
            .map_err(|_| poisoned())
    }

    async fn is_approver(&self, user_id: &UserId) -> Result<bool, RoleLookupError> {
        self.approvers
            .read()
            .map(|approvers| approvers.contains(user_id))
            .map_err(|_| poisoned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roster_changes_are_live() {
        let roles = StaticRoleMembership::new([UserId::new("alice"), UserId::new("bob")]);
        assert_eq!(roles.count_approvers().await.unwrap(), 2);

        assert!(roles.grant(UserId::new("carol")).unwrap());
        assert!(!roles.grant(UserId::new("carol")).unwrap());
        assert!(roles.revoke(&UserId::new("alice")).unwrap());

        assert_eq!(roles.count_approvers().await.unwrap(), 2);
        assert!(!roles.is_approver(&UserId::new("alice")).await.unwrap());
        assert!(roles.is_approver(&UserId::new("carol")).await.unwrap());
    }

    #[tokio::test]
    async fn test_poisoned_roster_reports_unavailable() {
        let roles = std::sync::Arc::new(StaticRoleMembership::new([UserId::new("alice")]));

        let poisoner = std::sync::Arc::clone(&roles);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.approvers.write().unwrap();
            panic!("poison the roster lock");
        })
        .join();

        assert!(matches!(
            roles.grant(UserId::new("bob")),
            Err(RoleLookupError::Unavailable(_))
        ));
        assert!(matches!(
            roles.revoke(&UserId::new("alice")),
            Err(RoleLookupError::Unavailable(_))
        ));
        assert!(roles.approvers().is_err());
        assert!(roles.count_approvers().await.is_err());
    }
}
