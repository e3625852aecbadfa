//! Notification queue and dispatcher
//!
//! The vote path never awaits notification I/O. After a status transition
//! is committed the coordinator drops a [`DecisionNotification`] onto a
//! bounded queue; a background [`NotificationDispatcher`] drains it and
//! calls the [`NotificationSink`] under a timeout.
//!
//! ```text
//! submit_vote ──commit──▶ NotificationQueue ──mpsc──▶ dispatcher task ──timeout──▶ sink
//!                              (try_send)                  │
//!                                                          └─ failures: warn!, no retry
//! ```

use crate::config::NotificationParams;
use crate::ports::notification_sink::{DecisionNotification, NotificationError, NotificationSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sending half of the notification queue
#[derive(Clone)]
pub struct NotificationQueue {
    sender: mpsc::Sender<DecisionNotification>,
}

impl NotificationQueue {
    pub fn new(sender: mpsc::Sender<DecisionNotification>) -> Self {
        Self { sender }
    }

    /// Enqueue without waiting; a full or closed queue is a delivery failure
    pub fn enqueue(&self, notification: DecisionNotification) -> Result<(), NotificationError> {
        self.sender.try_send(notification).map_err(|e| match e {
            mpsc::error::TrySendError::Full(n) => NotificationError::QueueUnavailable(format!(
                "queue full, dropping notification for {}",
                n.document_id
            )),
            mpsc::error::TrySendError::Closed(n) => NotificationError::QueueUnavailable(format!(
                "dispatcher stopped, dropping notification for {}",
                n.document_id
            )),
        })
    }
}

/// Delivery counters reported when the dispatcher stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub delivered: usize,
    pub failed: usize,
}

/// Background consumer of the notification queue
pub struct NotificationDispatcher {
    sink: Arc<dyn NotificationSink>,
    timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>, timeout: Duration) -> Self {
        Self { sink, timeout }
    }

    /// Spawn the dispatcher on the current runtime.
    ///
    /// Cancelling `shutdown` stops intake; notifications already queued are
    /// still delivered before the task finishes. The task also finishes once
    /// every [`NotificationQueue`] clone is dropped.
    pub fn spawn(
        sink: Arc<dyn NotificationSink>,
        params: &NotificationParams,
        shutdown: CancellationToken,
    ) -> (NotificationQueue, JoinHandle<DispatchStats>) {
        let (sender, receiver) = mpsc::channel(params.queue_capacity.max(1));
        let dispatcher = Self::new(sink, params.delivery_timeout);
        let handle = tokio::spawn(async move { dispatcher.run(receiver, shutdown).await });
        (NotificationQueue::new(sender), handle)
    }

    async fn run(
        &self,
        mut receiver: mpsc::Receiver<DecisionNotification>,
        shutdown: CancellationToken,
    ) -> DispatchStats {
        let mut stats = DispatchStats::default();

        loop {
            let next = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                next = receiver.recv() => next,
            };
            match next {
                Some(notification) => self.deliver_counted(&notification, &mut stats).await,
                None => return stats,
            }
        }

        // Drain what was queued before shutdown
        receiver.close();
        while let Some(notification) = receiver.recv().await {
            self.deliver_counted(&notification, &mut stats).await;
        }

        info!(
            "Notification dispatcher stopped ({} delivered, {} failed)",
            stats.delivered, stats.failed
        );
        stats
    }

    async fn deliver_counted(&self, notification: &DecisionNotification, stats: &mut DispatchStats) {
        match self.deliver(notification).await {
            Ok(()) => {
                debug!(
                    "Notified {} that {} was {}",
                    notification.requester_id, notification.document_id, notification.outcome
                );
                stats.delivered += 1;
            }
            Err(e) => {
                warn!(
                    "Failed to notify {} about {}: {}",
                    notification.requester_id, notification.document_id, e
                );
                stats.failed += 1;
            }
        }
    }

    /// One delivery attempt bounded by the configured timeout
    pub async fn deliver(&self, notification: &DecisionNotification) -> Result<(), NotificationError> {
        match tokio::time::timeout(self.timeout, self.sink.document_decided(notification)).await {
            Ok(result) => result,
            Err(_) => Err(NotificationError::Timeout(self.timeout)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approval_domain::{DocumentId, DocumentStatus, UserId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Sink that records every notification it receives
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) received: Mutex<Vec<DecisionNotification>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn document_decided(
            &self,
            notification: &DecisionNotification,
        ) -> Result<(), NotificationError> {
            self.received.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    /// Sink whose every delivery fails
    pub(crate) struct FailingSink;

    #[async_trait]
    impl NotificationSink for FailingSink {
        async fn document_decided(
            &self,
            _notification: &DecisionNotification,
        ) -> Result<(), NotificationError> {
            Err(NotificationError::DeliveryFailed("smtp unreachable".to_string()))
        }
    }

    /// Sink that never answers
    pub(crate) struct HangingSink;

    #[async_trait]
    impl NotificationSink for HangingSink {
        async fn document_decided(
            &self,
            _notification: &DecisionNotification,
        ) -> Result<(), NotificationError> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    fn notification(doc: &str) -> DecisionNotification {
        DecisionNotification::new(
            DocumentId::new(doc),
            DocumentStatus::Approved,
            UserId::new("requester"),
        )
    }

    #[tokio::test]
    async fn test_dispatcher_delivers_queued_notifications() {
        let sink = Arc::new(RecordingSink::default());
        let shutdown = CancellationToken::new();
        let (queue, handle) =
            NotificationDispatcher::spawn(sink.clone(), &NotificationParams::default(), shutdown);

        queue.enqueue(notification("doc-1")).unwrap();
        queue.enqueue(notification("doc-2")).unwrap();
        drop(queue);

        let stats = handle.await.unwrap();
        assert_eq!(stats, DispatchStats { delivered: 2, failed: 0 });
        assert_eq!(sink.received.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_drains_pending_notifications() {
        let sink = Arc::new(RecordingSink::default());
        let shutdown = CancellationToken::new();
        let (queue, handle) = NotificationDispatcher::spawn(
            sink.clone(),
            &NotificationParams::default(),
            shutdown.clone(),
        );

        for i in 0..5 {
            queue.enqueue(notification(&format!("doc-{}", i))).unwrap();
        }
        shutdown.cancel();

        let stats = handle.await.unwrap();
        assert_eq!(stats.delivered, 5);
        assert!(queue.enqueue(notification("late")).is_err());
    }

    #[tokio::test]
    async fn test_failed_delivery_is_counted_not_propagated() {
        let shutdown = CancellationToken::new();
        let (queue, handle) = NotificationDispatcher::spawn(
            Arc::new(FailingSink),
            &NotificationParams::default(),
            shutdown,
        );

        queue.enqueue(notification("doc-1")).unwrap();
        drop(queue);

        let stats = handle.await.unwrap();
        assert_eq!(stats, DispatchStats { delivered: 0, failed: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_timeout_is_a_failure() {
        let dispatcher = NotificationDispatcher::new(Arc::new(HangingSink), Duration::from_secs(2));

        let err = dispatcher.deliver(&notification("doc-1")).await.unwrap_err();
        assert!(matches!(err, NotificationError::Timeout(d) if d == Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn test_full_queue_rejects_without_blocking() {
        let (sender, _receiver) = mpsc::channel(1);
        let queue = NotificationQueue::new(sender);

        queue.enqueue(notification("doc-1")).unwrap();
        let err = queue.enqueue(notification("doc-2")).unwrap_err();
        assert!(matches!(err, NotificationError::QueueUnavailable(_)));
    }
}
