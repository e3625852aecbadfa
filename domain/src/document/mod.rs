//! Documents under review
//!
//! A [`Document`] starts `Pending` and moves at most once to a terminal
//! status. Every persisted change bumps its `version`, which storage uses
//! as an optimistic-concurrency token.

pub mod entities;

pub use entities::{Document, DocumentStatus};
