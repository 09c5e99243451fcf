//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{Importance, NotificationRequest};

use super::TOAST_TIMEOUT_MS;

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name used when the request has none
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
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

    /// Command-line arguments for a request
    fn args(&self, request: &NotificationRequest) -> Vec<String> {
        let app_name = if request.app_name.is_empty() {
            self.app_name.clone()
        } else {
            request.app_name.clone()
        };
        let mut args = vec!["--app-name".to_string(), app_name];

        if request.toast {
            args.extend([
                "--transient".to_string(),
                "--expire-time".to_string(),
                TOAST_TIMEOUT_MS.to_string(),
                "--".to_string(),
                request.message.clone(),
            ]);
            return args;
        }

        args.extend([
            "--urgency".to_string(),
            urgency(request.importance).to_string(),
            "--expire-time".to_string(),
            request.timeout.saturating_mul(1000).to_string(),
        ]);
        if let Some(path) = request.app_icon.path() {
            args.extend(["--icon".to_string(), path.to_string_lossy().into_owned()]);
        }
        // Text after "--" is never read as an option
        args.extend(["--".to_string(), request.title.clone(), request.message.clone()]);
        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// notify-send urgency level for an importance
fn urgency(importance: Importance) -> &'static str {
    match importance {
        Importance::Urgent => "critical",
        Importance::High | Importance::Medium | Importance::Default => "normal",
        Importance::Low => "low",
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        request.check_encoding()?;

        let status = Command::new("notify-send")
            .args(self.args(&request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NativeCall("notify-send not found".to_string())
                } else {
                    NotificationError::NativeCall(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::NativeCall(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
