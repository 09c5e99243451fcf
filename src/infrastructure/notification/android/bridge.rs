//! Boundary between the Android adapter and the Java notification framework

use crate::application::ports::NotificationError;
use crate::domain::notification::{ChannelImportance, LargeIcon};

/// Slot every notification is posted under.
///
/// A second post to the same slot replaces the first.
pub const NOTIFICATION_SLOT_ID: i32 = 0;

/// First SDK level that requires notification channels (Oreo)
pub const CHANNELS_MIN_SDK: i32 = 26;

/// First SDK level with `Notification.Builder.build()` (Jelly Bean)
pub const BUILDER_BUILD_MIN_SDK: i32 = 16;

/// First SDK level with `PendingIntent.FLAG_IMMUTABLE` (Marshmallow)
pub const IMMUTABLE_INTENT_MIN_SDK: i32 = 23;

/// `Intent.ACTION_MAIN`
pub const ACTION_MAIN: &str = "android.intent.action.MAIN";

/// `Intent.CATEGORY_LAUNCHER`
pub const CATEGORY_LAUNCHER: &str = "android.intent.category.LAUNCHER";

/// `Intent.FLAG_ACTIVITY_SINGLE_TOP`
pub const FLAG_ACTIVITY_SINGLE_TOP: i32 = 0x2000_0000;

/// `PendingIntent.FLAG_IMMUTABLE`
pub const FLAG_IMMUTABLE: i32 = 0x0400_0000;

/// Notification channel to create or reuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    /// Channel id, the application package name
    pub id: String,
    /// User-visible channel name
    pub name: String,
    pub importance: ChannelImportance,
}

/// Intent that brings the launching activity back to the foreground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchIntent {
    pub action: &'static str,
    pub category: &'static str,
    pub flags: i32,
    pub request_code: i32,
    /// Flags for `PendingIntent.getActivity`
    pub pending_flags: i32,
}

impl LaunchIntent {
    /// MAIN/LAUNCHER intent reusing the running activity
    pub fn main_launcher(sdk_int: i32) -> Self {
        Self {
            action: ACTION_MAIN,
            category: CATEGORY_LAUNCHER,
            flags: FLAG_ACTIVITY_SINGLE_TOP,
            request_code: 0,
            pending_flags: if sdk_int >= IMMUTABLE_INTENT_MIN_SDK {
                FLAG_IMMUTABLE
            } else {
                0
            },
        }
    }
}

/// Fully assembled `Notification.Builder` state.
///
/// The small icon is always the application icon and is not listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSpec {
    /// Channel the builder is bound to, `None` below Oreo
    pub channel_id: Option<String>,
    pub title: String,
    pub text: String,
    pub ticker: String,
    pub large_icon: Option<LargeIcon>,
    pub only_alert_once: bool,
    pub ongoing: bool,
    /// `setWhen` epoch milliseconds; also turns the chronometer on
    pub chronometer_base_ms: Option<i64>,
    pub content_intent: LaunchIntent,
    pub auto_cancel: bool,
}

/// `Toast.LENGTH_*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ToastDuration {
    Short = 0,
    Long = 1,
}

impl ToastDuration {
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }
}

/// Calls into the Android notification framework.
///
/// Every method is a thin wrapper over the matching Java API; exceptions
/// come back as [`NotificationError::NativeCall`].
pub trait AndroidBridge: Send + Sync + 'static {
    /// `Build.VERSION.SDK_INT`
    fn sdk_int(&self) -> i32;

    /// Package name of the running application
    fn package_name(&self) -> Result<String, NotificationError>;

    /// Create a channel, or update the existing one with the same id
    fn create_channel(&self, channel: &ChannelSpec) -> Result<(), NotificationError>;

    /// Build the notification and hand it to `NotificationManager.notify`
    fn post(&self, slot_id: i32, notification: &NotificationSpec) -> Result<(), NotificationError>;

    /// Show a toast. Must be called on the UI thread.
    fn show_toast(&self, text: &str, duration: ToastDuration) -> Result<(), NotificationError>;
}
