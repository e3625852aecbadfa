//! Core domain concepts shared across all subdomains.
//!
//! - [`ids::DocumentId`] / [`ids::UserId`] - opaque identifiers
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod ids;
