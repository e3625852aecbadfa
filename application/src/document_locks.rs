//! Per-document critical sections
//!
//! One async mutex per document id. Writers on the same document queue up
//! behind each other; writers on different documents never contend.

use approval_domain::DocumentId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OwnedMutexGuard;

/// Registry size above which idle entries are pruned
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Default)]
pub struct DocumentLocks {
    locks: Mutex<HashMap<DocumentId, Arc<tokio::sync::Mutex<()>>>>,
}

impl DocumentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to a document; released when the guard drops
    pub async fn acquire(&self, document_id: &DocumentId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            if locks.len() > PRUNE_THRESHOLD {
                // Only the registry holds these; nobody is waiting on them
                locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            locks
                .entry(document_id.clone())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Number of documents with a registered lock
    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
