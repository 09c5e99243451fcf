//! plyer-notify - cross-platform notification facade
//!
//! A single `notify` operation dispatched to the platform notifier: the
//! Android notification manager (through JNI), notify-rust on desktops, or
//! the `notify-send` binary on Linux.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification request, importance and icon value objects, errors
//! - **Application**: The [`NotificationFacade`](application::NotificationFacade)
//!   and port interfaces (traits)
//! - **Infrastructure**: Platform notifiers and the config file store
//! - **CLI**: Command-line interface, argument parsing and logging setup
//!
//! # Example
//!
//! ```no_run
//! use plyer_notify::application::NotificationFacade;
//! use plyer_notify::domain::notification::NotificationRequest;
//! use plyer_notify::infrastructure::{create_notifier, NotifierBackend};
//!
//! # async fn run() -> Result<(), plyer_notify::application::ports::NotificationError> {
//! let facade = NotificationFacade::new(create_notifier(NotifierBackend::Auto, "demo"));
//! facade.notify(NotificationRequest::new("plyer", "hello")).await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
