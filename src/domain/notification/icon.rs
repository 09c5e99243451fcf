//! Application icon selection

use std::path::{Path, PathBuf};

/// Icon requested for a notification.
///
/// The small status-bar icon is always the application's own icon; this
/// only decides what goes in the notification body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppIcon {
    /// No icon given: reuse the application icon in the body
    AppDefault,
    /// Explicitly empty: status-bar icon only
    #[default]
    Suppressed,
    /// Image file decoded and shown in the body
    Path(PathBuf),
}

/// Large icon attached to the notification body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LargeIcon {
    /// The application's launcher icon
    Application,
    /// An image file on disk
    File(PathBuf),
}

impl AppIcon {
    /// Resolve an optional icon argument.
    ///
    /// `None` reuses the application icon, `""` suppresses the large icon
    /// and any other value is a path to decode.
    pub fn from_option(icon: Option<&str>) -> Self {
        match icon {
            None => Self::AppDefault,
            Some("") => Self::Suppressed,
            Some(path) => Self::Path(PathBuf::from(path)),
        }
    }

    /// Large icon to attach, if any
    pub fn large_icon(&self) -> Option<LargeIcon> {
        match self {
            Self::AppDefault => Some(LargeIcon::Application),
            Self::Suppressed => None,
            Self::Path(path) => Some(LargeIcon::File(path.clone())),
        }
    }

    /// Path of a custom icon file, if one was given
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl From<&str> for AppIcon {
    fn from(icon: &str) -> Self {
        Self::from_option(Some(icon))
    }
}

impl From<String> for AppIcon {
    fn from(icon: String) -> Self {
        if icon.is_empty() {
            Self::Suppressed
        } else {
            Self::Path(PathBuf::from(icon))
        }
    }
}

impl From<PathBuf> for AppIcon {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str().is_empty() {
            Self::Suppressed
        } else {
            Self::Path(path)
        }
    }
}

impl From<Option<&str>> for AppIcon {
    fn from(icon: Option<&str>) -> Self {
        Self::from_option(icon)
    }
}
