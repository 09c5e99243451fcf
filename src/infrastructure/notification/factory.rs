//! Notifier backend selection

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Notifier;
use crate::application::UnimplementedNotifier;

#[cfg(not(target_os = "android"))]
use super::{notify_rust::NotifyRustNotifier, notify_send::NotifySendNotifier};

/// Notification backends that can be requested by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierBackend {
    /// Best backend for the platform
    #[default]
    Auto,
    /// notify-rust library (desktop platforms)
    NotifyRust,
    /// notify-send binary (Linux desktops)
    NotifySend,
    /// Android notification manager
    Android,
}

impl NotifierBackend {
    /// Backend that `Auto` resolves to on this platform
    pub const fn platform_default() -> Self {
        if cfg!(target_os = "android") {
            NotifierBackend::Android
        } else {
            NotifierBackend::NotifyRust
        }
    }

    /// Replace `Auto` with the platform default
    pub const fn resolve(self) -> Self {
        match self {
            NotifierBackend::Auto => Self::platform_default(),
            other => other,
        }
    }

    /// Whether this backend is compiled for the current platform
    pub const fn is_available(self) -> bool {
        match self.resolve() {
            NotifierBackend::NotifyRust | NotifierBackend::NotifySend => {
                !cfg!(target_os = "android")
            }
            NotifierBackend::Android => cfg!(target_os = "android"),
            NotifierBackend::Auto => false,
        }
    }
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierBackend::Auto => write!(f, "auto"),
            NotifierBackend::NotifyRust => write!(f, "notify-rust"),
            NotifierBackend::NotifySend => write!(f, "notify-send"),
            NotifierBackend::Android => write!(f, "android"),
        }
    }
}

/// Error type for parsing a backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for NotifierBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(NotifierBackend::Auto),
            "notify-rust" => Ok(NotifierBackend::NotifyRust),
            "notify-send" => Ok(NotifierBackend::NotifySend),
            "android" => Ok(NotifierBackend::Android),
            _ => Err(ParseBackendError {
                value: s.to_string(),
                valid_options: "auto, notify-rust, notify-send, android",
            }),
        }
    }
}

/// Create a notifier for the requested backend.
///
/// A backend that is not built for this platform, or that fails to attach,
/// yields a notifier that reports `NotImplemented` on every call.
pub fn create_notifier(backend: NotifierBackend, app_name: &str) -> Box<dyn Notifier> {
    let resolved = backend.resolve();
    tracing::debug!(requested = %backend, resolved = %resolved, "selecting notifier");

    match resolved {
        #[cfg(not(target_os = "android"))]
        NotifierBackend::NotifyRust => Box::new(NotifyRustNotifier::with_app_name(app_name)),
        #[cfg(not(target_os = "android"))]
        NotifierBackend::NotifySend => Box::new(NotifySendNotifier::with_app_name(app_name)),
        #[cfg(target_os = "android")]
        NotifierBackend::Android => match super::android::create_android_notifier() {
            Ok(notifier) => Box::new(notifier),
            Err(e) => {
                tracing::warn!("android notifier unavailable: {}", e);
                Box::new(UnimplementedNotifier::new())
            }
        },
        other => {
            tracing::warn!(backend = %other, "backend not available on this platform");
            Box::new(UnimplementedNotifier::new())
        }
    }
}
