//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::{Hint, Urgency};
use notify_rust::{Notification, Timeout};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
#[cfg(all(unix, not(target_os = "macos")))]
use crate::domain::notification::Importance;
use crate::domain::notification::NotificationRequest;

use super::TOAST_TIMEOUT_MS;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name used when the request has none
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a request into a notify-rust notification.
///
/// `fallback_app_name` is used when the request carries no app name.
fn build_notification(request: &NotificationRequest, fallback_app_name: &str) -> Notification {
    let app_name = if request.app_name.is_empty() {
        fallback_app_name
    } else {
        request.app_name.as_str()
    };

    let mut notification = Notification::new();
    notification.appname(app_name);

    if request.toast {
        notification
            .body(&request.message)
            .timeout(Timeout::Milliseconds(TOAST_TIMEOUT_MS));
        #[cfg(all(unix, not(target_os = "macos")))]
        notification.hint(Hint::Transient(true));
        return notification;
    }

    notification
        .summary(&request.title)
        .body(&request.message)
        .timeout(timeout_ms(request.timeout));

    if let Some(path) = request.app_icon.path() {
        notification.icon(&path.to_string_lossy());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        notification.urgency(urgency(request.importance));
        if request.ongoing {
            notification.hint(Hint::Resident(true));
        }
    }

    notification
}

/// Seconds to a notify-rust timeout, saturating at `u32::MAX` ms
fn timeout_ms(secs: u64) -> Timeout {
    let ms = secs.saturating_mul(1000);
    Timeout::Milliseconds(u32::try_from(ms).unwrap_or(u32::MAX))
}

/// Freedesktop urgency for an importance level
#[cfg(all(unix, not(target_os = "macos")))]
fn urgency(importance: Importance) -> Urgency {
    match importance {
        Importance::Urgent => Urgency::Critical,
        Importance::High | Importance::Medium | Importance::Default => Urgency::Normal,
        Importance::Low => Urgency::Low,
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        request.check_encoding()?;
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            build_notification(&request, &app_name)
                .show()
                .map_err(|e| NotificationError::NativeCall(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::NativeCall(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_with_custom_app_name() {
        let notifier = NotifyRustNotifier::with_app_name("TestApp");
        assert_eq!(notifier.app_name, "TestApp");
    }

    #[test]
    fn notifier_default_creates() {
        let notifier = NotifyRustNotifier::default();
        assert_eq!(notifier.app_name, "plyer-notify");
    }

    #[test]
    fn build_maps_fields() {
        let request = NotificationRequest::new("plyer", "hello")
            .with_app_name("demo")
            .with_app_icon("/tmp/icon.png")
            .with_timeout(3);

        let notification = build_notification(&request, "unused");
        assert_eq!(notification.summary, "plyer");
        assert_eq!(notification.body, "hello");
        assert_eq!(notification.appname, "demo");
        assert_eq!(notification.icon, "/tmp/icon.png");
        assert_eq!(notification.timeout, Timeout::Milliseconds(3000));
    }

    #[test]
    fn build_falls_back_to_configured_app_name() {
        let notification = build_notification(&NotificationRequest::new("t", "m"), "fallback");
        assert_eq!(notification.appname, "fallback");
    }

    #[test]
    fn build_toast_is_body_only() {
        let mut request = NotificationRequest::toast("hello");
        request.title = "ignored".to_string();

        let notification = build_notification(&request, "plyer-notify");
        assert_eq!(notification.summary, "");
        assert_eq!(notification.body, "hello");
        assert_eq!(notification.timeout, Timeout::Milliseconds(TOAST_TIMEOUT_MS));
    }

    #[test]
    fn timeout_saturates() {
        assert_eq!(timeout_ms(u64::MAX), Timeout::Milliseconds(u32::MAX));
        assert_eq!(timeout_ms(0), Timeout::Milliseconds(0));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn urgency_follows_importance() {
        assert_eq!(urgency(Importance::Urgent), Urgency::Critical);
        assert_eq!(urgency(Importance::High), Urgency::Normal);
        assert_eq!(urgency(Importance::Medium), Urgency::Normal);
        assert_eq!(urgency(Importance::Low), Urgency::Low);
        assert_eq!(urgency(Importance::Default), Urgency::Normal);
    }

    #[tokio::test]
    async fn nul_in_text_is_rejected_before_dispatch() {
        let notifier = NotifyRustNotifier::new();
        let err = notifier
            .notify(NotificationRequest::new("t", "bad\0"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NotificationError::ArgumentEncoding { field: "message", .. }
        ));
    }
}
