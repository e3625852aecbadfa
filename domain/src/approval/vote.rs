//! Vote types
//!
//! A [`Vote`] is keyed by the (document, approver) pair. Re-voting revises
//! the existing vote in place instead of adding a second one, so a
//! [`VoteTally`] never counts an approver twice.

use crate::core::error::DomainError;
use crate::core::ids::{DocumentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An approver's decision on a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDecision {
    Approve,
    Reject,
}

impl VoteDecision {
    pub fn is_approve(&self) -> bool {
        matches!(self, VoteDecision::Approve)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDecision::Approve => "approve",
            VoteDecision::Reject => "reject",
        }
    }
}

impl std::fmt::Display for VoteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VoteDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" | "approved" | "yes" => Ok(VoteDecision::Approve),
            "reject" | "rejected" | "no" => Ok(VoteDecision::Reject),
            other => Err(format!("Unknown vote decision: {}. Valid: approve, reject", other)),
        }
    }
}

/// A single approver's vote on a document
///
/// # Example
///
/// ```
/// use approval_domain::approval::{Vote, VoteDecision};
///
/// let mut vote = Vote::new("doc-1", "alice", VoteDecision::Reject, None).unwrap();
/// vote.revise(VoteDecision::Approve, Some("Fixed in rev 2".to_string()));
/// assert!(vote.decision.is_approve());
/// assert_eq!(vote.comments.as_deref(), Some("Fixed in rev 2"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub document_id: DocumentId,
    pub approver_id: UserId,
    pub decision: VoteDecision,
    pub comments: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    /// Create a vote stamped with the current time
    pub fn new(
        document_id: impl Into<DocumentId>,
        approver_id: impl Into<UserId>,
        decision: VoteDecision,
        comments: Option<String>,
    ) -> Result<Self, DomainError> {
        let document_id = document_id.into();
        let approver_id = approver_id.into();
        if document_id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyIdentifier("document"));
        }
        if approver_id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyIdentifier("approver"));
        }

        Ok(Self {
            document_id,
            approver_id,
            decision,
            comments: normalize_comments(comments),
            timestamp: Utc::now(),
        })
    }

    /// Overwrite decision, comments and timestamp (re-vote)
    pub fn revise(&mut self, decision: VoteDecision, comments: Option<String>) {
        self.decision = decision;
        self.comments = normalize_comments(comments);
        self.timestamp = Utc::now();
    }

    /// Whether this vote is keyed by the given pair
    pub fn is_for(&self, document_id: &DocumentId, approver_id: &UserId) -> bool {
        &self.document_id == document_id && &self.approver_id == approver_id
    }
}

fn normalize_comments(comments: Option<String>) -> Option<String> {
    comments.filter(|c| !c.trim().is_empty())
}

/// Counts derived from a document's active votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub approve_count: usize,
    pub reject_count: usize,
}

impl VoteTally {
    pub fn new(approve_count: usize, reject_count: usize) -> Self {
        Self {
            approve_count,
            reject_count,
        }
    }

    /// Count decisions across a vote set
    pub fn from_votes<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> Self {
        votes
            .into_iter()
            .fold(Self::default(), |mut tally, vote| {
                match vote.decision {
                    VoteDecision::Approve => tally.approve_count += 1,
                    VoteDecision::Reject => tally.reject_count += 1,
                }
                tally
            })
    }

    /// Total votes cast
    pub fn total_votes(&self) -> usize {
        self.approve_count + self.reject_count
    }

    /// Generate a visual vote summary against the approver roster (e.g., "[●●○··]")
    pub fn summary(&self, eligible: usize) -> String {
        let outstanding = eligible.saturating_sub(self.total_votes());
        let mut summary = String::from("[");
        summary.extend(std::iter::repeat_n('●', self.approve_count));
        summary.extend(std::iter::repeat_n('○', self.reject_count));
        summary.extend(std::iter::repeat_n('·', outstanding));
        summary.push(']');
        summary
    }
}
