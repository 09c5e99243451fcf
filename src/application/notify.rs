//! Notification facade use case
//!
//! The single cross-platform entry point: callers hand a
//! [`NotificationRequest`] to [`NotificationFacade::notify`], which forwards
//! it untouched to whichever platform adapter is bound.

use async_trait::async_trait;

use crate::domain::notification::NotificationRequest;

use super::ports::{NotificationError, Notifier};

/// Facade over the platform notifier.
///
/// Performs no validation of its own. With no adapter bound every call
/// fails with [`NotificationError::NotImplemented`].
pub struct NotificationFacade<N = Box<dyn Notifier>> {
    notifier: Option<N>,
}

impl<N: Notifier> NotificationFacade<N> {
    /// Facade bound to a platform adapter
    pub fn new(notifier: N) -> Self {
        Self {
            notifier: Some(notifier),
        }
    }

    /// Facade with no adapter
    pub fn unbound() -> Self {
        Self { notifier: None }
    }

    /// Send a notification.
    pub async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        let Some(notifier) = &self.notifier else {
            tracing::debug!("notify called without a bound notifier");
            return Err(NotificationError::NotImplemented);
        };

        tracing::debug!(
            title = %request.title,
            toast = request.toast,
            importance = %request.importance,
            "dispatching notification"
        );

        notifier.notify(request).await
    }
}

/// Notifier for platforms without an implementation.
///
/// Every call fails with [`NotificationError::NotImplemented`].
pub struct UnimplementedNotifier;

impl UnimplementedNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnimplementedNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for UnimplementedNotifier {
    async fn notify(&self, _request: NotificationRequest) -> Result<(), NotificationError> {
        Err(NotificationError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Records every request it receives
    #[derive(Clone, Default)]
    struct RecordingNotifier {
        received: Arc<Mutex<Vec<NotificationRequest>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
            self.received.lock().unwrap().push(request);
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _request: NotificationRequest) -> Result<(), NotificationError> {
            Err(NotificationError::NativeCall("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn forwards_request_verbatim() {
        let notifier = RecordingNotifier::default();
        let facade = NotificationFacade::new(notifier.clone());

        let request = NotificationRequest::new("plyer", "hello").with_ticker("tick");
        facade.notify(request.clone()).await.unwrap();

        assert_eq!(*notifier.received.lock().unwrap(), vec![request]);
    }

    #[tokio::test]
    async fn unbound_facade_is_not_implemented() {
        let facade = NotificationFacade::<RecordingNotifier>::unbound();

        let err = facade
            .notify(NotificationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err, NotificationError::NotImplemented);
    }

    #[tokio::test]
    async fn unimplemented_notifier_always_fails() {
        let facade = NotificationFacade::new(UnimplementedNotifier::new());

        for request in [
            NotificationRequest::default(),
            NotificationRequest::toast("hello"),
        ] {
            assert_eq!(
                facade.notify(request).await,
                Err(NotificationError::NotImplemented)
            );
        }
    }

    #[tokio::test]
    async fn adapter_errors_propagate_unchanged() {
        let facade: NotificationFacade =
            NotificationFacade::new(Box::new(FailingNotifier) as Box<dyn Notifier>);
        let err = facade
            .notify(NotificationRequest::new("t", "m"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            NotificationError::NativeCall("service unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn facade_does_not_validate() {
        let notifier = RecordingNotifier::default();
        let facade = NotificationFacade::new(notifier.clone());

        let request = NotificationRequest::new("bad\0title", "");
        facade.notify(request).await.unwrap();

        assert_eq!(notifier.received.lock().unwrap().len(), 1);
    }
}
