//! Domain layer - Core value objects
//!
//! Contains the notification request, its importance and icon types,
//! configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use notification::{AppIcon, ChannelImportance, Importance, LargeIcon, NotificationRequest};
