//! JNI implementation of the Android bridge
//!
//! Talks to `NotificationManager`, `Notification.Builder`, `Toast` and
//! `PendingIntent` through the process-wide `JavaVM` and activity exposed
//! by `ndk-context`.

use std::sync::OnceLock;

use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use crate::application::ports::NotificationError;
use crate::domain::notification::LargeIcon;

use super::bridge::{
    AndroidBridge, ChannelSpec, NotificationSpec, ToastDuration, BUILDER_BUILD_MIN_SDK,
};

const BUILDER_CLASS: &str = "android/app/Notification$Builder";
const BUILDER_RETURN: &str = "Landroid/app/Notification$Builder;";

/// Failure inside a JNI call sequence
enum BridgeFailure {
    Jni(jni::errors::Error),
    Native(String),
}

impl From<jni::errors::Error> for BridgeFailure {
    fn from(err: jni::errors::Error) -> Self {
        Self::Jni(err)
    }
}

type JniResult<T> = Result<T, BridgeFailure>;

/// Bridge over the running activity.
///
/// The notification service handle is looked up on first use and kept
/// for the lifetime of the bridge.
pub struct JniBridge {
    vm: JavaVM,
    context: GlobalRef,
    sdk_int: i32,
    package_name: String,
    manager: OnceLock<GlobalRef>,
}

impl JniBridge {
    /// Attach to the activity registered with `ndk-context`
    pub fn from_android_context() -> Result<Self, NotificationError> {
        let ctx = ndk_context::android_context();
        // SAFETY: ndk-context hands out the process JavaVM and a live
        // global reference to the activity.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| NotificationError::NativeCall(e.to_string()))?;
        let activity = unsafe { JObject::from_raw(ctx.context().cast()) };

        let (context, sdk_int, package_name) = {
            let mut env = vm
                .attach_current_thread()
                .map_err(|e| NotificationError::NativeCall(e.to_string()))?;
            let result = (|| -> JniResult<(GlobalRef, i32, String)> {
                let context = env.new_global_ref(&activity)?;
                let sdk_int = env
                    .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
                    .i()?;
                let name = env
                    .call_method(&activity, "getPackageName", "()Ljava/lang/String;", &[])?
                    .l()?;
                let package_name: String = env.get_string(&JString::from(name))?.into();
                Ok((context, sdk_int, package_name))
            })();
            finish(&mut env, result)?
        };

        tracing::debug!(sdk_int, package = %package_name, "attached to Android context");

        Ok(Self {
            vm,
            context,
            sdk_int,
            package_name,
            manager: OnceLock::new(),
        })
    }

    /// Run a JNI call sequence on an attached thread inside a local frame
    fn with_env<T, F>(&self, f: F) -> Result<T, NotificationError>
    where
        F: FnOnce(&mut JNIEnv) -> JniResult<T>,
    {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| NotificationError::NativeCall(e.to_string()))?;
        let result = env.with_local_frame(32, |env| f(env));
        finish(&mut env, result)
    }

    /// `NotificationManager`, fetched once
    fn notification_manager(&self, env: &mut JNIEnv) -> JniResult<GlobalRef> {
        if let Some(manager) = self.manager.get() {
            return Ok(manager.clone());
        }

        let service = env
            .get_static_field(
                "android/content/Context",
                "NOTIFICATION_SERVICE",
                "Ljava/lang/String;",
            )?
            .l()?;
        let manager = env
            .call_method(
                self.context.as_obj(),
                "getSystemService",
                "(Ljava/lang/String;)Ljava/lang/Object;",
                &[JValue::Object(&service)],
            )?
            .l()?;
        if manager.is_null() {
            return Err(BridgeFailure::Native(
                "notification service unavailable".to_string(),
            ));
        }

        let manager = env.new_global_ref(manager)?;
        Ok(self.manager.get_or_init(|| manager).clone())
    }

    /// Resource id of the application icon
    fn app_icon_id(&self, env: &mut JNIEnv) -> JniResult<i32> {
        let info = env
            .call_method(
                self.context.as_obj(),
                "getApplicationInfo",
                "()Landroid/content/pm/ApplicationInfo;",
                &[],
            )?
            .l()?;
        Ok(env.get_field(&info, "icon", "I")?.i()?)
    }

    /// Decode the large icon bitmap
    fn decode_large_icon<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        icon: &LargeIcon,
        app_icon_id: i32,
    ) -> JniResult<JObject<'local>> {
        let bitmap = match icon {
            LargeIcon::Application => {
                let resources = env
                    .call_method(
                        self.context.as_obj(),
                        "getResources",
                        "()Landroid/content/res/Resources;",
                        &[],
                    )?
                    .l()?;
                env.call_static_method(
                    "android/graphics/BitmapFactory",
                    "decodeResource",
                    "(Landroid/content/res/Resources;I)Landroid/graphics/Bitmap;",
                    &[JValue::Object(&resources), JValue::Int(app_icon_id)],
                )?
                .l()?
            }
            LargeIcon::File(path) => {
                let path = env.new_string(path.to_string_lossy())?;
                env.call_static_method(
                    "android/graphics/BitmapFactory",
                    "decodeFile",
                    "(Ljava/lang/String;)Landroid/graphics/Bitmap;",
                    &[JValue::Object(&path)],
                )?
                .l()?
            }
        };

        if bitmap.is_null() {
            return Err(BridgeFailure::Native(format!(
                "could not decode icon {:?}",
                icon
            )));
        }
        Ok(bitmap)
    }

    /// Pending intent that relaunches the current activity
    fn content_intent<'local>(
        &self,
        env: &mut JNIEnv<'local>,
        spec: &NotificationSpec,
    ) -> JniResult<JObject<'local>> {
        let launch = &spec.content_intent;
        let app_context = env
            .call_method(
                self.context.as_obj(),
                "getApplicationContext",
                "()Landroid/content/Context;",
                &[],
            )?
            .l()?;
        let activity_class = env.get_object_class(self.context.as_obj())?;

        let intent = env.new_object(
            "android/content/Intent",
            "(Landroid/content/Context;Ljava/lang/Class;)V",
            &[JValue::Object(&app_context), JValue::Object(&activity_class)],
        )?;
        env.call_method(
            &intent,
            "setFlags",
            "(I)Landroid/content/Intent;",
            &[JValue::Int(launch.flags)],
        )?;
        let action = env.new_string(launch.action)?;
        env.call_method(
            &intent,
            "setAction",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&action)],
        )?;
        let category = env.new_string(launch.category)?;
        env.call_method(
            &intent,
            "addCategory",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&category)],
        )?;

        Ok(env
            .call_static_method(
                "android/app/PendingIntent",
                "getActivity",
                "(Landroid/content/Context;ILandroid/content/Intent;I)Landroid/app/PendingIntent;",
                &[
                    JValue::Object(&app_context),
                    JValue::Int(launch.request_code),
                    JValue::Object(&intent),
                    JValue::Int(launch.pending_flags),
                ],
            )?
            .l()?)
    }
}

/// Set a `CharSequence` property on the builder
fn set_text(env: &mut JNIEnv, builder: &JObject, setter: &str, value: &str) -> JniResult<()> {
    let value = env.new_string(value)?;
    env.call_method(
        builder,
        setter,
        format!("(Ljava/lang/CharSequence;){}", BUILDER_RETURN),
        &[JValue::Object(&value)],
    )?;
    Ok(())
}

/// Set a boolean property on the builder
fn set_flag(env: &mut JNIEnv, builder: &JObject, setter: &str, value: bool) -> JniResult<()> {
    env.call_method(
        builder,
        setter,
        format!("(Z){}", BUILDER_RETURN),
        &[JValue::Bool(value.into())],
    )?;
    Ok(())
}

/// Convert the outcome of a call sequence, clearing any pending Java exception
fn finish<T>(env: &mut JNIEnv, result: JniResult<T>) -> Result<T, NotificationError> {
    result.map_err(|failure| match failure {
        BridgeFailure::Native(message) => NotificationError::NativeCall(message),
        BridgeFailure::Jni(err) => {
            let detail = take_exception(env).unwrap_or_else(|| err.to_string());
            tracing::error!("JNI call failed: {}", detail);
            NotificationError::NativeCall(detail)
        }
    })
}

/// Clear the pending exception and describe it with `Throwable.toString()`
fn take_exception(env: &mut JNIEnv) -> Option<String> {
    if !env.exception_check().ok()? {
        return None;
    }
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    let text = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    env.get_string(&JString::from(text)).ok().map(Into::into)
}

impl AndroidBridge for JniBridge {
    fn sdk_int(&self) -> i32 {
        self.sdk_int
    }

    fn package_name(&self) -> Result<String, NotificationError> {
        Ok(self.package_name.clone())
    }

    fn create_channel(&self, channel: &ChannelSpec) -> Result<(), NotificationError> {
        self.with_env(|env| {
            let id = env.new_string(&channel.id)?;
            let name = env.new_string(&channel.name)?;
            let app_channel = env.new_object(
                "android/app/NotificationChannel",
                "(Ljava/lang/String;Ljava/lang/CharSequence;I)V",
                &[
                    JValue::Object(&id),
                    JValue::Object(&name),
                    JValue::Int(channel.importance.as_raw()),
                ],
            )?;

            let manager = self.notification_manager(env)?;
            env.call_method(
                manager.as_obj(),
                "createNotificationChannel",
                "(Landroid/app/NotificationChannel;)V",
                &[JValue::Object(&app_channel)],
            )?;
            Ok(())
        })
    }

    fn post(&self, slot_id: i32, spec: &NotificationSpec) -> Result<(), NotificationError> {
        self.with_env(|env| {
            let builder = match &spec.channel_id {
                Some(channel_id) => {
                    let channel_id = env.new_string(channel_id)?;
                    env.new_object(
                        BUILDER_CLASS,
                        "(Landroid/content/Context;Ljava/lang/String;)V",
                        &[
                            JValue::Object(self.context.as_obj()),
                            JValue::Object(&channel_id),
                        ],
                    )?
                }
                None => env.new_object(
                    BUILDER_CLASS,
                    "(Landroid/content/Context;)V",
                    &[JValue::Object(self.context.as_obj())],
                )?,
            };

            set_text(env, &builder, "setContentTitle", &spec.title)?;
            set_text(env, &builder, "setContentText", &spec.text)?;
            set_text(env, &builder, "setTicker", &spec.ticker)?;

            if spec.only_alert_once {
                set_flag(env, &builder, "setOnlyAlertOnce", true)?;
            }
            if spec.ongoing {
                set_flag(env, &builder, "setOngoing", true)?;
            }
            if let Some(base) = spec.chronometer_base_ms {
                env.call_method(
                    &builder,
                    "setWhen",
                    format!("(J){}", BUILDER_RETURN),
                    &[JValue::Long(base)],
                )?;
                set_flag(env, &builder, "setUsesChronometer", true)?;
            }

            let app_icon_id = self.app_icon_id(env)?;
            env.call_method(
                &builder,
                "setSmallIcon",
                format!("(I){}", BUILDER_RETURN),
                &[JValue::Int(app_icon_id)],
            )?;
            if let Some(icon) = &spec.large_icon {
                let bitmap = self.decode_large_icon(env, icon, app_icon_id)?;
                env.call_method(
                    &builder,
                    "setLargeIcon",
                    format!("(Landroid/graphics/Bitmap;){}", BUILDER_RETURN),
                    &[JValue::Object(&bitmap)],
                )?;
            }

            let pending = self.content_intent(env, spec)?;
            env.call_method(
                &builder,
                "setContentIntent",
                format!("(Landroid/app/PendingIntent;){}", BUILDER_RETURN),
                &[JValue::Object(&pending)],
            )?;
            if spec.auto_cancel {
                set_flag(env, &builder, "setAutoCancel", true)?;
            }

            let build = if self.sdk_int >= BUILDER_BUILD_MIN_SDK {
                "build"
            } else {
                "getNotification"
            };
            let notification = env
                .call_method(&builder, build, "()Landroid/app/Notification;", &[])?
                .l()?;

            let manager = self.notification_manager(env)?;
            env.call_method(
                manager.as_obj(),
                "notify",
                "(ILandroid/app/Notification;)V",
                &[JValue::Int(slot_id), JValue::Object(&notification)],
            )?;
            Ok(())
        })
    }

    fn show_toast(&self, text: &str, duration: ToastDuration) -> Result<(), NotificationError> {
        self.with_env(|env| {
            let text = env.new_string(text)?;
            let toast = env
                .call_static_method(
                    "android/widget/Toast",
                    "makeText",
                    "(Landroid/content/Context;Ljava/lang/CharSequence;I)Landroid/widget/Toast;",
                    &[
                        JValue::Object(self.context.as_obj()),
                        JValue::Object(&text),
                        JValue::Int(duration.as_raw()),
                    ],
                )?
                .l()?;
            env.call_method(&toast, "show", "()V", &[])?;
            Ok(())
        })
    }
}
