//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::notification::Importance;

/// plyer-notify - send a notification through the platform notifier
#[derive(Parser, Debug)]
#[command(name = "plyer-notify")]
#[command(version)]
#[command(about = "Show a notification or toast through the platform notification service")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Notification title
    #[arg(short = 't', long, default_value = "")]
    pub title: String,

    /// Notification body
    #[arg(short = 'm', long, required = true)]
    pub message: Option<String>,

    /// Name of the sending application
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Icon file shown in the notification body ("" for none)
    #[arg(long, value_name = "PATH")]
    pub app_icon: Option<String>,

    /// Importance level
    #[arg(short = 'i', long, value_name = "LEVEL")]
    pub importance: Option<ImportanceArg>,

    /// Display time in seconds (desktop backends only)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Text announced by accessibility services
    #[arg(long, default_value = "")]
    pub ticker: String,

    /// Show a short-lived toast instead of a notification
    #[arg(long)]
    pub toast: bool,

    /// Show elapsed time since the notification was posted
    #[arg(long)]
    pub chronometer: bool,

    /// Only alert if the notification is not already showing
    #[arg(long)]
    pub only_alert_once: bool,

    /// Keep the notification until it is removed programmatically
    #[arg(long)]
    pub ongoing: bool,

    /// Dismiss the notification when it is tapped
    #[arg(long)]
    pub remove_when_clicked: bool,

    /// Notification backend (auto, notify-rust, notify-send, android)
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Importance argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportanceArg {
    Urgent,
    High,
    Medium,
    Low,
    Default,
}

impl From<ImportanceArg> for Importance {
    fn from(arg: ImportanceArg) -> Self {
        match arg {
            ImportanceArg::Urgent => Importance::Urgent,
            ImportanceArg::High => Importance::High,
            ImportanceArg::Medium => Importance::Medium,
            ImportanceArg::Low => Importance::Low,
            ImportanceArg::Default => Importance::Default,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "app_icon", "importance", "timeout", "backend"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
