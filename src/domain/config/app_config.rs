//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::{AppIcon, Importance, DEFAULT_TIMEOUT_SECS};

/// Application name used when nothing else is configured
pub const DEFAULT_APP_NAME: &str = "plyer-notify";

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND: &str = "auto";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub app_icon: Option<String>,
    pub importance: Option<String>,
    pub timeout: Option<u64>,
    pub backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            app_icon: None,
            importance: Some(Importance::Default.to_string()),
            timeout: Some(DEFAULT_TIMEOUT_SECS),
            backend: Some(DEFAULT_BACKEND.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            app_icon: other.app_icon.or(self.app_icon),
            importance: other.importance.or(self.importance),
            timeout: other.timeout.or(self.timeout),
            backend: other.backend.or(self.backend),
        }
    }

    /// Get app name, or the crate name if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get app icon; an unset icon suppresses the large icon
    pub fn app_icon_or_default(&self) -> AppIcon {
        self.app_icon
            .as_deref()
            .map(AppIcon::from)
            .unwrap_or_default()
    }

    /// Get importance, falling back to default for unset or unknown names
    pub fn importance_or_default(&self) -> Importance {
        self.importance
            .as_deref()
            .map(Importance::from_name)
            .unwrap_or_default()
    }

    /// Get timeout in seconds, or 10 if not set
    pub fn timeout_or_default(&self) -> u64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Get backend name, or "auto" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }
}
