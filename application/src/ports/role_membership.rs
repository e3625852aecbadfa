//! Role membership port
//!
//! Who counts as an approver is owned by the user/role system. The engine
//! asks fresh on every evaluation, so the same vote set can produce a
//! different outcome after the roster changes.

use approval_domain::UserId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RoleLookupError {
    #[error("Role lookup unavailable: {0}")]
    Unavailable(String),
}

/// Lookup of the approver role
#[async_trait]
pub trait RoleMembership: Send + Sync {
    /// Number of users currently holding the approver role
    async fn count_approvers(&self) -> Result<usize, RoleLookupError>;

    /// Whether the user currently holds the approver role
    async fn is_approver(&self, user_id: &UserId) -> Result<bool, RoleLookupError>;
}
