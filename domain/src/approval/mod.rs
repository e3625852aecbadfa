//! Approval decision domain
//!
//! # Core Concepts
//!
//! ## Vote
//! One active vote per (document, approver). Re-voting revises the vote.
//!
//! ## Approval Policy
//! A pure function of the vote counts, the live approver count (the quorum)
//! and the active [`ApprovalConfig`].
//!
//! ```text
//! ┌──────────────┐   tally    ┌────────────────┐   outcome
//! │  Vote set    │ ─────────▶ │ ApprovalPolicy │ ─────────▶ Approved / Rejected / Pending
//! └──────────────┘            └────────────────┘
//!                                ▲          ▲
//!                 approver count │          │ ApprovalConfig (fetched per evaluation)
//! ```

pub mod config;
pub mod mode;
pub mod outcome;
pub mod policy;
pub mod vote;

// Re-export main types
pub use config::ApprovalConfig;
pub use mode::ApprovalMode;
pub use outcome::DecisionOutcome;
pub use policy::{ApprovalPolicy, PolicyInput};
pub use vote::{Vote, VoteDecision, VoteTally};
