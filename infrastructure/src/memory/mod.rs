//! In-memory adapters for every storage port
//!
//! Process-local and non-durable. They back the CLI simulator and the
//! integration tests; a deployment with real storage swaps them out
//! behind the same ports.

mod config_store;
mod documents;
mod roles;
mod votes;

pub use config_store::InMemoryConfigStore;
pub use documents::InMemoryDocumentRepository;
pub use roles::StaticRoleMembership;
pub use votes::InMemoryVoteRepository;

use approval_application::RepositoryError;

fn poisoned(what: &str) -> RepositoryError {
    RepositoryError::Storage(format!("{} lock poisoned", what))
}
