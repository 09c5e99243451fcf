//! Android notification adapter
//!
//! [`AndroidNotifier`] turns a request into a channel, a builder and a
//! dispatch through an [`AndroidBridge`]. On Android the bridge is
//! [`JniBridge`]; elsewhere only the adapter logic is compiled so it can be
//! exercised against other bridges.
//!
//! Toasts are queued for the application's main thread. A host that does
//! not own a [`UiLoop`] calls [`run_main_thread_tasks`] from its main loop.

mod adapter;
mod bridge;
#[cfg(target_os = "android")]
mod jni_bridge;
mod ui;

pub use adapter::{assemble, chronometer_base_ms, AndroidNotifier};
pub use bridge::{
    AndroidBridge, ChannelSpec, LaunchIntent, NotificationSpec, ToastDuration,
    BUILDER_BUILD_MIN_SDK, CHANNELS_MIN_SDK, NOTIFICATION_SLOT_ID,
};
#[cfg(target_os = "android")]
pub use jni_bridge::JniBridge;
pub use ui::{main_thread, run_main_thread_tasks, ui_channel, UiLoop, UiTask, UiThread};

/// Create an adapter over the running activity.
///
/// Toasts go to the process-wide main-thread queue; the host shows them by
/// calling [`run_main_thread_tasks`] from its main thread.
#[cfg(target_os = "android")]
pub fn create_android_notifier(
) -> Result<AndroidNotifier<JniBridge>, crate::application::ports::NotificationError> {
    AndroidNotifier::new(JniBridge::from_android_context()?, main_thread())
}
