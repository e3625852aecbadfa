//! Domain layer for approval-quorum
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Approval
//!
//! - **Vote**: one per (document, approver); re-voting revises it
//! - **Approval Policy**: decides Approved / Rejected / Pending from the
//!   vote counts, the live approver count and the active configuration
//!
//! ## Document
//!
//! - **Pending** until the policy returns a terminal outcome
//! - **Approved / Rejected** are terminal; no vote changes them afterwards

pub mod approval;
pub mod core;
pub mod document;
pub mod validation;

// Re-export commonly used types
pub use approval::{
    ApprovalConfig, ApprovalMode, ApprovalPolicy, DecisionOutcome, PolicyInput, Vote,
    VoteDecision, VoteTally,
};
pub use core::{
    error::DomainError,
    ids::{DocumentId, UserId},
};
pub use document::{Document, DocumentStatus};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
