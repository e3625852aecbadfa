//! Notification sink adapters
//!
//! - [`TracingNotificationSink`]: logs each decision
//! - [`JsonlNotificationSink`]: appends each decision to an outbox file

mod jsonl_sink;
mod tracing_sink;

pub use jsonl_sink::JsonlNotificationSink;
pub use tracing_sink::TracingNotificationSink;
