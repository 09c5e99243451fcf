//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::notification::Importance;
use crate::infrastructure::notification::NotifierBackend;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    tracing::debug!(key, value, "config updated");
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(config_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, config_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        // An empty icon is meaningful: it suppresses the large icon
        "app_icon" => config.app_icon = Some(value.to_string()),
        "importance" => {
            let importance = value
                .parse::<Importance>()
                .map_err(|e| invalid(e.to_string()))?;
            config.importance = Some(importance.to_string());
        }
        "timeout" => {
            let secs = value
                .parse::<u64>()
                .map_err(|_| invalid("Value must be a whole number of seconds".to_string()))?;
            config.timeout = Some(secs);
        }
        "backend" => {
            let backend = value
                .parse::<NotifierBackend>()
                .map_err(|e| invalid(e.to_string()))?;
            config.backend = Some(backend.to_string());
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Display value of a key, `None` when unset
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "app_name" => config.app_name.clone(),
        "app_icon" => config.app_icon.as_ref().map(|icon| {
            if icon.is_empty() {
                "\"\"".to_string()
            } else {
                icon.clone()
            }
        }),
        "importance" => config.importance.clone(),
        "timeout" => config.timeout.map(|t| t.to_string()),
        "backend" => config.backend.clone(),
        _ => None,
    }
}
