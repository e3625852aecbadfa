//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod manage_config;
pub mod open_document;
pub mod submit_vote;
