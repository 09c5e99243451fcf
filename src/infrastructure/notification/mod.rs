//! Notification infrastructure module
//!
//! Android notifications go through the notification manager; desktop
//! platforms use notify-rust, with notify-send as a Linux alternative.

pub mod android;
mod factory;
#[cfg(not(target_os = "android"))]
mod notify_rust;
#[cfg(not(target_os = "android"))]
mod notify_send;

pub use factory::{create_notifier, NotifierBackend, ParseBackendError};
#[cfg(not(target_os = "android"))]
pub use notify_rust::NotifyRustNotifier;
#[cfg(not(target_os = "android"))]
pub use notify_send::NotifySendNotifier;

/// How long a toast stays on screen, matching Android's long toast
#[cfg(not(target_os = "android"))]
const TOAST_TIMEOUT_MS: u32 = 3500;
