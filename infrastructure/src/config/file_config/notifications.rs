//! Notification delivery settings from TOML (`[notifications]` section)
//!
//! ```toml
//! [notifications]
//! timeout_ms = 5000
//! queue_capacity = 256
//! outbox = "decisions.jsonl"   # omit to log decisions instead
//! ```

use approval_application::NotificationParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationsConfig {
    /// Per-delivery timeout in milliseconds
    pub timeout_ms: u64,
    pub queue_capacity: usize,
    /// JSONL outbox file for decided documents
    pub outbox: Option<PathBuf>,
}

impl Default for FileNotificationsConfig {
    fn default() -> Self {
        let params = NotificationParams::default();
        Self {
            timeout_ms: params.delivery_timeout.as_millis() as u64,
            queue_capacity: params.queue_capacity,
            outbox: None,
        }
    }
}

impl FileNotificationsConfig {
    pub fn to_params(&self) -> NotificationParams {
        NotificationParams::default()
            .with_delivery_timeout(Duration::from_millis(self.timeout_ms))
            .with_queue_capacity(self.queue_capacity)
    }
}
