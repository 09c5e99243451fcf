//! Application layer - Use cases and port interfaces
//!
//! Contains the notification facade and the trait definitions
//! for platform integrations.

pub mod notify;
pub mod ports;

// Re-export use cases
pub use notify::{NotificationFacade, UnimplementedNotifier};
