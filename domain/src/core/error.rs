//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown approval mode: {0}. Valid: majority, unanimous, min_votes, min_percentage")]
    UnknownMode(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Identifier cannot be empty: {0}")]
    EmptyIdentifier(&'static str),
}

impl DomainError {
    /// Check if this error comes from an invalid approval configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::UnknownMode(_))
    }
}
