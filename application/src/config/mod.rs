//! Application-level configuration.
//!
//! - [`NotificationParams`]: notification queue sizing and delivery timeout

pub mod notification_params;

pub use notification_params::NotificationParams;
