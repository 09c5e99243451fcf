//! Domain error types

use thiserror::Error;

use crate::domain::notification::Importance;

/// Error when an importance level name is not recognized
#[derive(Debug, Clone, Error)]
#[error("Invalid importance: \"{input}\". Valid levels are: {}", valid_importance_levels())]
pub struct ImportanceParseError {
    pub input: String,
}

fn valid_importance_levels() -> String {
    Importance::ALL
        .iter()
        .map(Importance::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when a text field cannot be handed to the platform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{field}' cannot be encoded: {reason}")]
pub struct TextEncodingError {
    pub field: &'static str,
    pub reason: String,
}
