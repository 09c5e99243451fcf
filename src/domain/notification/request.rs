//! Notification request value object

use std::time::Duration;

use crate::domain::error::TextEncodingError;

use super::icon::AppIcon;
use super::importance::Importance;

/// Default display time in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything a single `notify` call carries.
///
/// Built once, passed by value down to the platform adapter and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Title of the notification
    pub title: String,
    /// Body text
    pub message: String,
    /// Name of the application sending the notification
    pub app_name: String,
    /// Icon shown in the notification body
    pub app_icon: AppIcon,
    /// Sound and visibility tier
    pub importance: Importance,
    /// Display time in seconds
    pub timeout: u64,
    /// Text announced by accessibility services when the notification appears
    pub ticker: String,
    /// Show a transient overlay instead of a persistent notification
    pub toast: bool,
    /// Render a live elapsed-time counter
    pub chronometer: bool,
    /// Only alert when the notification is not already showing
    pub only_alert_once: bool,
    /// Prevent the user from dismissing the notification
    pub ongoing: bool,
    /// Dismiss the notification once it is tapped
    pub remove_when_clicked: bool,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            app_name: String::new(),
            app_icon: AppIcon::default(),
            importance: Importance::default(),
            timeout: DEFAULT_TIMEOUT_SECS,
            ticker: String::new(),
            toast: false,
            chronometer: false,
            only_alert_once: false,
            ongoing: false,
            remove_when_clicked: false,
        }
    }
}

impl NotificationRequest {
    /// Request with a title and a message, everything else defaulted
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Toast-only request
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast: true,
            ..Default::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_app_icon(mut self, app_icon: impl Into<AppIcon>) -> Self {
        self.app_icon = app_icon.into();
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn with_chronometer(mut self, chronometer: bool) -> Self {
        self.chronometer = chronometer;
        self
    }

    pub fn with_only_alert_once(mut self, only_alert_once: bool) -> Self {
        self.only_alert_once = only_alert_once;
        self
    }

    pub fn with_ongoing(mut self, ongoing: bool) -> Self {
        self.ongoing = ongoing;
        self
    }

    pub fn with_remove_when_clicked(mut self, remove_when_clicked: bool) -> Self {
        self.remove_when_clicked = remove_when_clicked;
        self
    }

    /// Display time as a `Duration`
    pub const fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Text fields paired with their names
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("title", self.title.as_str()),
            ("message", self.message.as_str()),
            ("app_name", self.app_name.as_str()),
            ("ticker", self.ticker.as_str()),
        ]
    }

    /// Check that every text field can cross into a C string.
    ///
    /// D-Bus, JNI and process arguments all reject interior NUL bytes.
    pub fn check_encoding(&self) -> Result<(), TextEncodingError> {
        for (field, value) in self.text_fields() {
            if let Some(pos) = value.find('\0') {
                return Err(TextEncodingError {
                    field,
                    reason: format!("interior NUL byte at offset {}", pos),
                });
            }
        }
        Ok(())
    }
}
