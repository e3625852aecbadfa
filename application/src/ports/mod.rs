//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod config_store;
pub mod notification_sink;
pub mod repository;
pub mod role_membership;
