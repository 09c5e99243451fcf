//! Facade integration tests through the public API

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use plyer_notify::application::ports::{NotificationError, Notifier};
use plyer_notify::application::NotificationFacade;
use plyer_notify::domain::notification::{AppIcon, Importance, NotificationRequest};
use plyer_notify::infrastructure::notification::android::{
    main_thread, run_main_thread_tasks, ui_channel, AndroidBridge, AndroidNotifier, ChannelSpec, NotificationSpec, ToastDuration,
};

/// Bridge that records every call it receives
#[derive(Default)]
struct LogBridge {
    calls: Mutex<Vec<String>>,
}

impl LogBridge {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AndroidBridge for LogBridge {
    fn sdk_int(&self) -> i32 {
        33
    }

    fn package_name(&self) -> Result<String, NotificationError> {
        Ok("org.example.app".to_string())
    }

    fn create_channel(&self, channel: &ChannelSpec) -> Result<(), NotificationError> {
        self.calls.lock().unwrap().push(format!(
            "channel {} {}",
            channel.id,
            channel.importance.as_raw()
        ));
        Ok(())
    }

    fn post(&self, slot_id: i32, notification: &NotificationSpec) -> Result<(), NotificationError> {
        self.calls.lock().unwrap().push(format!(
            "post {} {}/{}",
            slot_id, notification.title, notification.text
        ));
        Ok(())
    }

    fn show_toast(&self, text: &str, _duration: ToastDuration) -> Result<(), NotificationError> {
        self.calls.lock().unwrap().push(format!("toast {}", text));
        Ok(())
    }
}

#[tokio::test]
async fn facade_drives_android_adapter() {
    let bridge = Arc::new(LogBridge::default());
    let (ui, mut ui_loop) = ui_channel();
    let notifier = AndroidNotifier::from_shared(Arc::clone(&bridge), ui).unwrap();
    let facade = NotificationFacade::new(notifier);

    facade
        .notify(NotificationRequest::new("plyer", "hello").with_importance(Importance::Urgent))
        .await
        .unwrap();
    facade
        .notify(NotificationRequest::new("plyer", "again"))
        .await
        .unwrap();
    facade
        .notify(NotificationRequest::toast("toasted"))
        .await
        .unwrap();

    assert_eq!(ui_loop.run_pending(), 1);
    assert_eq!(
        bridge.calls(),
        vec![
            "channel org.example.app 4",
            "post 0 plyer/hello",
            "channel org.example.app 3",
            "post 0 plyer/again",
            "toast toasted",
        ]
    );
}

#[tokio::test]
async fn toast_waits_for_main_thread_drain() {
    let bridge = Arc::new(LogBridge::default());
    let notifier = AndroidNotifier::from_shared(Arc::clone(&bridge), main_thread()).unwrap();

    notifier
        .notify(NotificationRequest::toast("later"))
        .await
        .unwrap();
    assert!(bridge.calls().is_empty());

    assert_eq!(run_main_thread_tasks(), 1);
    assert_eq!(bridge.calls(), vec!["toast later"]);
}

#[tokio::test]
async fn unbound_facade_reports_not_implemented() {
    let facade: NotificationFacade = NotificationFacade::unbound();
    let err = facade
        .notify(NotificationRequest::new("t", "m"))
        .await
        .unwrap_err();

    assert_eq!(err, NotificationError::NotImplemented);
    assert_eq!(err.to_string(), "No usable implementation found!");
}

/// Notifier that keeps the last request it was given
struct Capture(Arc<Mutex<Option<NotificationRequest>>>);

#[async_trait]
impl Notifier for Capture {
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        *self.0.lock().unwrap() = Some(request);
        Ok(())
    }
}

#[tokio::test]
async fn custom_notifier_receives_request_verbatim() {
    let last = Arc::new(Mutex::new(None));
    let facade = NotificationFacade::new(Capture(Arc::clone(&last)));
    let request = NotificationRequest::new("t", "m").with_app_icon(AppIcon::AppDefault);

    facade.notify(request.clone()).await.unwrap();

    assert_eq!(last.lock().unwrap().as_ref(), Some(&request));
}
