//! Notification domain types

mod icon;
mod importance;
mod request;

pub use icon::{AppIcon, LargeIcon};
pub use importance::{ChannelImportance, Importance};
pub use request::{NotificationRequest, DEFAULT_TIMEOUT_SECS};
