//! Main app runner for sending a notification

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, NotificationError};
use crate::application::NotificationFacade;
use crate::domain::config::AppConfig;
use crate::domain::notification::{AppIcon, NotificationRequest};
use crate::infrastructure::{create_notifier, NotifierBackend, XdgConfigStore};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Notification settings resolved from config and flags
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub request: NotificationRequest,
    pub backend: NotifierBackend,
}

impl NotifyOptions {
    /// Build options from parsed flags and the merged config.
    ///
    /// Flags win over config; config wins over built-in defaults.
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Result<Self, String> {
        let backend = config
            .backend_or_default()
            .parse::<NotifierBackend>()
            .map_err(|e| e.to_string())?;

        let app_icon = match cli.app_icon.as_deref() {
            Some(icon) => AppIcon::from(icon),
            None => config.app_icon_or_default(),
        };

        let importance = cli
            .importance
            .map(Into::into)
            .unwrap_or_else(|| config.importance_or_default());

        let mut request =
            NotificationRequest::new(cli.title.clone(), cli.message.clone().unwrap_or_default())
                .with_app_name(config.app_name_or_default())
                .with_app_icon(app_icon)
                .with_importance(importance)
                .with_timeout(config.timeout_or_default())
                .with_ticker(cli.ticker.clone())
                .with_chronometer(cli.chronometer)
                .with_only_alert_once(cli.only_alert_once)
                .with_ongoing(cli.ongoing)
                .with_remove_when_clicked(cli.remove_when_clicked);
        request.toast = cli.toast;

        Ok(Self { request, backend })
    }
}

/// Config overrides taken from command-line flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        app_name: cli.app_name.clone(),
        app_icon: None, // icon flag is resolved separately so "" survives
        importance: None,
        timeout: cli.timeout,
        backend: cli.backend.clone(),
    }
}

/// Send one notification and report the outcome
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let notifier = create_notifier(options.backend, &options.request.app_name);
    let facade = NotificationFacade::new(notifier);

    let label = if options.request.toast {
        "Showing toast..."
    } else {
        "Sending notification..."
    };
    presenter.start_spinner(label);

    match facade.notify(options.request).await {
        Ok(()) => {
            presenter.spinner_success("Delivered");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Not delivered");
            presenter.error(&e.to_string());
            if e == NotificationError::NotImplemented {
                presenter.info(&format!(
                    "backend '{}' is not available on this platform",
                    options.backend
                ));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
