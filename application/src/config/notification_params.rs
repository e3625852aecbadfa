//! Notification parameters for side-channel delivery.
//!
//! [`NotificationParams`] groups the static parameters of the
//! [`NotificationDispatcher`](crate::notification::NotificationDispatcher).
//! They bound the best-effort path only; vote submission itself has no
//! timeout.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notification dispatch parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationParams {
    /// Upper bound for a single delivery attempt. Expiry counts as a failed delivery.
    pub delivery_timeout: Duration,
    /// Capacity of the queue between the vote path and the dispatcher.
    pub queue_capacity: usize,
}

impl Default for NotificationParams {
    fn default() -> Self {
        Self {
            delivery_timeout: Duration::from_secs(5),
            queue_capacity: 256,
        }
    }
}

impl NotificationParams {
    // ==================== Builder Methods ====================

    pub fn with_delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = timeout;
        self
    }

    /// Set the queue capacity (at least 1)
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }
}
