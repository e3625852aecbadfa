//! JSONL outbox for decided documents.
//!
//! Each [`DecisionNotification`] becomes one JSON line with a `type` field
//! and a write `timestamp`, appended through a buffered writer. Something
//! downstream (a mailer, an inbox importer) consumes the file.
//!
//! The write runs on tokio's blocking pool, so a slow disk never stalls a
//! runtime worker and the dispatcher's delivery timeout can still fire.

use approval_application::{DecisionNotification, NotificationError, NotificationSink};
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Thread-safe via `Arc<Mutex<BufWriter<File>>>`. Flushes after every
/// record and on `Drop`.
pub struct JsonlNotificationSink {
    writer: Arc<Mutex<BufWriter<File>>>,
    path: PathBuf,
}

impl JsonlNotificationSink {
    /// Open (or create) the outbox for appending.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create outbox directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open outbox {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Arc::new(Mutex::new(BufWriter::new(file))),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record_line(notification: &DecisionNotification) -> Result<String, NotificationError> {
        let mut record = serde_json::to_value(notification)
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "type".to_string(),
                serde_json::Value::String("document_decided".to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(
                    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
            );
        }

        serde_json::to_string(&record).map_err(|e| NotificationError::DeliveryFailed(e.to_string()))
    }

    fn append(
        writer: &Mutex<BufWriter<File>>,
        path: &Path,
        line: &str,
    ) -> Result<(), NotificationError> {
        let mut writer = writer
            .lock()
            .map_err(|_| NotificationError::DeliveryFailed("outbox lock poisoned".to_string()))?;
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| NotificationError::DeliveryFailed(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl NotificationSink for JsonlNotificationSink {
    async fn document_decided(&self, notification: &DecisionNotification) -> Result<(), NotificationError> {
        let line = Self::record_line(notification)?;
        let writer = Arc::clone(&self.writer);
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::append(&writer, &path, &line))
            .await
            .map_err(|e| NotificationError::DeliveryFailed(format!("outbox writer task: {}", e)))?
    }
}

impl Drop for JsonlNotificationSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approval_application::NotificationDispatcher;
    use approval_domain::{DocumentId, DocumentStatus, UserId};
    use std::time::{Duration, Instant};

    fn notification(doc: &str, outcome: DocumentStatus) -> DecisionNotification {
        DecisionNotification::new(DocumentId::new(doc), outcome, UserId::new("dana"))
            .with_decided_by(UserId::new("alice"))
    }

    #[tokio::test]
    async fn test_outbox_writes_one_line_per_decision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("decisions.jsonl");
        let sink = JsonlNotificationSink::new(&path).unwrap();

        sink.document_decided(&notification("doc-1", DocumentStatus::Approved))
            .await
            .unwrap();
        sink.document_decided(&notification("doc-2", DocumentStatus::Rejected))
            .await
            .unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "document_decided");
        assert_eq!(lines[0]["document_id"], "doc-1");
        assert_eq!(lines[0]["outcome"], "Approved");
        assert_eq!(lines[0]["requester_id"], "dana");
        assert_eq!(lines[1]["outcome"], "Rejected");
        assert!(lines[1]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_outbox_appends_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decisions.jsonl");

        for doc in ["doc-1", "doc-2"] {
            let sink = JsonlNotificationSink::new(&path).unwrap();
            sink.document_decided(&notification(doc, DocumentStatus::Approved))
                .await
                .unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlNotificationSink::new(blocker.join("decisions.jsonl")).is_none());
    }

    #[tokio::test]
    async fn test_slow_outbox_times_out_under_dispatcher() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decisions.jsonl");
        let sink = Arc::new(JsonlNotificationSink::new(&path).unwrap());

        // Another writer holds the outbox well past the delivery timeout
        let held = Arc::clone(&sink.writer);
        let (locked_tx, locked_rx) = std::sync::mpsc::channel();
        let holder = std::thread::spawn(move || {
            let _guard = held.lock().unwrap();
            locked_tx.send(()).unwrap();
            std::thread::sleep(Duration::from_millis(500));
        });
        locked_rx.recv().unwrap();

        let dispatcher = NotificationDispatcher::new(sink.clone(), Duration::from_millis(50));
        let started = Instant::now();
        let result = dispatcher
            .deliver(&notification("doc-1", DocumentStatus::Approved))
            .await;

        assert!(matches!(result, Err(NotificationError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_millis(400));

        holder.join().unwrap();
    }
}
