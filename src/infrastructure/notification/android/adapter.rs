//! Android notification adapter

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::error::TextEncodingError;
use crate::domain::notification::{Importance, NotificationRequest};

use super::bridge::{
    AndroidBridge, ChannelSpec, LaunchIntent, NotificationSpec, ToastDuration, CHANNELS_MIN_SDK,
    NOTIFICATION_SLOT_ID,
};
use super::ui::UiThread;

/// Notifier backed by the Android notification framework.
///
/// The channel id is the application package name, read once when the
/// adapter is created.
pub struct AndroidNotifier<B: AndroidBridge> {
    bridge: Arc<B>,
    ui: UiThread,
    channel_id: String,
}

impl<B: AndroidBridge> AndroidNotifier<B> {
    /// Create an adapter that owns its bridge
    pub fn new(bridge: B, ui: UiThread) -> Result<Self, NotificationError> {
        Self::from_shared(Arc::new(bridge), ui)
    }

    /// Create an adapter over a bridge shared with other code
    pub fn from_shared(bridge: Arc<B>, ui: UiThread) -> Result<Self, NotificationError> {
        let channel_id = bridge.package_name()?;
        Ok(Self {
            bridge,
            ui,
            channel_id,
        })
    }

    /// Channel id notifications are posted to on Oreo and later
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Queue `message` as a toast on the UI thread
    fn toast(&self, message: String) -> Result<(), NotificationError> {
        let bridge = Arc::clone(&self.bridge);
        self.ui.post(move || {
            if let Err(e) = bridge.show_toast(&message, ToastDuration::Long) {
                tracing::error!("failed to show toast: {}", e);
            }
        })
    }

    /// Create the application channel when the SDK needs one.
    ///
    /// Returns the channel id the builder must be bound to.
    fn resolve_channel(
        &self,
        name: &str,
        importance: Importance,
    ) -> Result<Option<String>, NotificationError> {
        if self.bridge.sdk_int() < CHANNELS_MIN_SDK {
            return Ok(None);
        }

        let channel = ChannelSpec {
            id: self.channel_id.clone(),
            name: name.to_string(),
            importance: importance.channel_importance(),
        };
        tracing::debug!(id = %channel.id, importance = ?channel.importance, "creating channel");
        self.bridge.create_channel(&channel)?;

        Ok(Some(channel.id))
    }
}

#[async_trait]
impl<B: AndroidBridge> Notifier for AndroidNotifier<B> {
    async fn notify(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        if request.toast {
            if request.message.contains('\0') {
                return Err(TextEncodingError {
                    field: "message",
                    reason: "interior NUL byte".to_string(),
                }
                .into());
            }
            return self.toast(request.message);
        }

        request.check_encoding()?;

        let channel_id = self.resolve_channel(&request.title, request.importance)?;
        let spec = assemble(
            &request,
            channel_id,
            self.bridge.sdk_int(),
            SystemTime::now(),
        );

        tracing::debug!(slot = NOTIFICATION_SLOT_ID, title = %spec.title, "posting notification");
        self.bridge.post(NOTIFICATION_SLOT_ID, &spec)
    }
}

/// Translate a request into builder state.
///
/// `request.timeout` has no builder counterpart and is not used.
pub fn assemble(
    request: &NotificationRequest,
    channel_id: Option<String>,
    sdk_int: i32,
    now: SystemTime,
) -> NotificationSpec {
    NotificationSpec {
        channel_id,
        title: request.title.clone(),
        text: request.message.clone(),
        ticker: request.ticker.clone(),
        large_icon: request.app_icon.large_icon(),
        only_alert_once: request.only_alert_once,
        ongoing: request.ongoing,
        chronometer_base_ms: request.chronometer.then(|| chronometer_base_ms(now)),
        content_intent: LaunchIntent::main_launcher(sdk_int),
        auto_cancel: request.remove_when_clicked,
    }
}

/// Epoch milliseconds of the nearest whole second
pub fn chronometer_base_ms(now: SystemTime) -> i64 {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64().round() as i64)
        .unwrap_or(0);
    secs * 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::domain::notification::{AppIcon, ChannelImportance, LargeIcon};
    use crate::infrastructure::notification::android::ui::{ui_channel, UiLoop};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateChannel(ChannelSpec),
        Post(i32, NotificationSpec),
        Toast(String, ToastDuration),
    }

    struct FakeBridge {
        sdk_int: i32,
        calls: Mutex<Vec<Call>>,
        fail_post: bool,
    }

    impl FakeBridge {
        fn new(sdk_int: i32) -> Self {
            Self {
                sdk_int,
                calls: Mutex::new(Vec::new()),
                fail_post: false,
            }
        }

        fn failing(sdk_int: i32) -> Self {
            Self {
                fail_post: true,
                ..Self::new(sdk_int)
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl AndroidBridge for FakeBridge {
        fn sdk_int(&self) -> i32 {
            self.sdk_int
        }

        fn package_name(&self) -> Result<String, NotificationError> {
            Ok("org.test.app".to_string())
        }

        fn create_channel(&self, channel: &ChannelSpec) -> Result<(), NotificationError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::CreateChannel(channel.clone()));
            Ok(())
        }

        fn post(&self, slot_id: i32, notification: &NotificationSpec) -> Result<(), NotificationError> {
            if self.fail_post {
                return Err(NotificationError::NativeCall(
                    "java.lang.SecurityException: permission denied".to_string(),
                ));
            }
            self.calls
                .lock()
                .unwrap()
                .push(Call::Post(slot_id, notification.clone()));
            Ok(())
        }

        fn show_toast(&self, text: &str, duration: ToastDuration) -> Result<(), NotificationError> {
            if self.fail_post {
                return Err(NotificationError::NativeCall(
                    "java.lang.RuntimeException: no looper".to_string(),
                ));
            }
            self.calls
                .lock()
                .unwrap()
                .push(Call::Toast(text.to_string(), duration));
            Ok(())
        }
    }

    fn setup(bridge: FakeBridge) -> (AndroidNotifier<FakeBridge>, Arc<FakeBridge>, UiLoop) {
        let bridge = Arc::new(bridge);
        let (ui, ui_loop) = ui_channel();
        let notifier = AndroidNotifier::from_shared(Arc::clone(&bridge), ui).unwrap();
        (notifier, bridge, ui_loop)
    }

    #[tokio::test]
    async fn simple_notification_creates_channel_then_posts() {
        let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(33));

        notifier
            .notify(NotificationRequest::new("plyer", "hello"))
            .await
            .unwrap();

        let calls = bridge.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            Call::CreateChannel(ChannelSpec {
                id: "org.test.app".to_string(),
                name: "plyer".to_string(),
                importance: ChannelImportance::Default,
            })
        );
        match &calls[1] {
            Call::Post(slot, spec) => {
                assert_eq!(*slot, 0);
                assert_eq!(spec.channel_id.as_deref(), Some("org.test.app"));
                assert_eq!(spec.title, "plyer");
                assert_eq!(spec.text, "hello");
            }
            other => panic!("expected post, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn toast_skips_channel_and_builder() {
        let (notifier, bridge, mut ui_loop) = setup(FakeBridge::new(33));

        notifier
            .notify(NotificationRequest::toast("hello").with_importance(Importance::Urgent))
            .await
            .unwrap();

        // Nothing runs until the UI thread drains the queue
        assert!(bridge.calls().is_empty());
        assert_eq!(ui_loop.run_pending(), 1);
        assert_eq!(
            bridge.calls(),
            vec![Call::Toast("hello".to_string(), ToastDuration::Long)]
        );
    }

    #[tokio::test]
    async fn toast_ignores_other_fields() {
        let (notifier, bridge, mut ui_loop) = setup(FakeBridge::new(33));

        let mut request = NotificationRequest::toast("hi");
        request.ticker = "bad\0ticker".to_string();
        notifier.notify(request).await.unwrap();

        ui_loop.run_pending();
        assert_eq!(bridge.calls().len(), 1);
    }

    #[tokio::test]
    async fn toast_failure_stays_on_ui_thread() {
        let (notifier, bridge, mut ui_loop) = setup(FakeBridge::failing(33));

        notifier
            .notify(NotificationRequest::toast("hello"))
            .await
            .unwrap();

        assert_eq!(ui_loop.run_pending(), 1);
        assert!(bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn no_channel_before_oreo() {
        let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(25));

        notifier
            .notify(NotificationRequest::new("t", "m"))
            .await
            .unwrap();

        let calls = bridge.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], Call::Post(0, spec) if spec.channel_id.is_none()));
    }

    #[tokio::test]
    async fn channel_importance_follows_request() {
        let cases = [
            (Importance::Urgent, ChannelImportance::High),
            (Importance::High, ChannelImportance::Default),
            (Importance::Medium, ChannelImportance::Low),
            (Importance::Low, ChannelImportance::Min),
            (Importance::Default, ChannelImportance::Default),
        ];

        for (importance, expected) in cases {
            let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(26));
            notifier
                .notify(NotificationRequest::new("t", "m").with_importance(importance))
                .await
                .unwrap();

            match &bridge.calls()[0] {
                Call::CreateChannel(channel) => assert_eq!(channel.importance, expected),
                other => panic!("expected channel, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn repeated_notify_reuses_slot() {
        let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(30));
        let request = NotificationRequest::new("same", "again");

        notifier.notify(request.clone()).await.unwrap();
        notifier.notify(request).await.unwrap();

        let slots: Vec<i32> = bridge
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post(slot, _) => Some(slot),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![NOTIFICATION_SLOT_ID, NOTIFICATION_SLOT_ID]);
    }

    #[tokio::test]
    async fn empty_icon_sets_no_large_icon() {
        let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(30));

        notifier
            .notify(NotificationRequest::new("t", "m").with_app_icon(""))
            .await
            .unwrap();

        match &bridge.calls()[1] {
            Call::Post(_, spec) => assert_eq!(spec.large_icon, None),
            other => panic!("expected post, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn post_failure_propagates() {
        let (notifier, _bridge, _ui_loop) = setup(FakeBridge::failing(30));

        let err = notifier
            .notify(NotificationRequest::new("t", "m"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            NotificationError::NativeCall(
                "java.lang.SecurityException: permission denied".to_string()
            )
        );
    }

    #[tokio::test]
    async fn encoding_failure_stops_before_native_calls() {
        let (notifier, bridge, _ui_loop) = setup(FakeBridge::new(30));

        let err = notifier
            .notify(NotificationRequest::new("bad\0", "m"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            NotificationError::ArgumentEncoding { field: "title", .. }
        ));
        assert!(bridge.calls().is_empty());
    }

    #[test]
    fn assemble_sets_optional_flags() {
        let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_600);
        let request = NotificationRequest::new("t", "m")
            .with_ticker("tick")
            .with_chronometer(true)
            .with_only_alert_once(true)
            .with_ongoing(true)
            .with_remove_when_clicked(true);

        let spec = assemble(&request, None, 30, now);
        assert_eq!(spec.ticker, "tick");
        assert!(spec.only_alert_once);
        assert!(spec.ongoing);
        assert!(spec.auto_cancel);
        assert_eq!(spec.chronometer_base_ms, Some(1_700_000_001_000));
        assert_eq!(spec.content_intent, LaunchIntent::main_launcher(30));
    }

    #[test]
    fn assemble_leaves_flags_off_by_default() {
        let spec = assemble(&NotificationRequest::default(), None, 30, SystemTime::now());
        assert!(!spec.only_alert_once);
        assert!(!spec.ongoing);
        assert!(!spec.auto_cancel);
        assert_eq!(spec.chronometer_base_ms, None);
    }

    #[test]
    fn assemble_resolves_icons() {
        let now = SystemTime::now();
        let app_default = NotificationRequest::default().with_app_icon(AppIcon::AppDefault);
        let custom = NotificationRequest::default().with_app_icon("/sdcard/icon.png");

        assert_eq!(
            assemble(&app_default, None, 30, now).large_icon,
            Some(LargeIcon::Application)
        );
        assert_eq!(
            assemble(&custom, None, 30, now).large_icon,
            Some(LargeIcon::File("/sdcard/icon.png".into()))
        );
    }

    #[test]
    fn chronometer_base_rounds_to_seconds() {
        let down = UNIX_EPOCH + Duration::from_millis(10_400);
        let up = UNIX_EPOCH + Duration::from_millis(10_500);
        assert_eq!(chronometer_base_ms(down), 10_000);
        assert_eq!(chronometer_base_ms(up), 11_000);
    }
}
