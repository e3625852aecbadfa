//! Notification sink that only logs

use approval_application::{DecisionNotification, NotificationError, NotificationSink};
use async_trait::async_trait;
use tracing::info;

pub struct TracingNotificationSink;

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn document_decided(&self, notification: &DecisionNotification) -> Result<(), NotificationError> {
        info!(
            target: "approval::notify",
            document = %notification.document_id,
            requester = %notification.requester_id,
            outcome = %notification.outcome,
            "Document decided"
        );
        Ok(())
    }
}
