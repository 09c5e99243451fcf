//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::TextEncodingError;
use crate::domain::notification::NotificationRequest;

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("No usable implementation found!")]
    NotImplemented,

    #[error("Failed to show notification: {0}")]
    NativeCall(String),

    #[error("Failed to encode '{field}': {reason}")]
    ArgumentEncoding { field: &'static str, reason: String },
}

impl From<TextEncodingError> for NotificationError {
    fn from(err: TextEncodingError) -> Self {
        Self::ArgumentEncoding {
            field: err.field,
            reason: err.reason,
        }
    }
}

/// Port for platform notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification, or a toast when `request.toast` is set.
    ///
    /// Fire-and-forget: returns once the platform accepted the request.
    /// A toast is shown later on the UI thread, so its failures are logged
    /// there and never reach the caller.
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().notify(request).await
    }
}
