//! Importance levels and their channel tiers

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ImportanceParseError;

/// Requested importance of a notification.
///
/// Controls sound and visibility. `Default` is what an unset importance
/// resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    Urgent,
    High,
    Medium,
    Low,
    #[default]
    Default,
}

impl Importance {
    /// All levels, most to least intrusive
    pub const ALL: [Importance; 5] = [
        Importance::Urgent,
        Importance::High,
        Importance::Medium,
        Importance::Low,
        Importance::Default,
    ];

    /// Resolve an importance name without failing.
    ///
    /// Empty and unknown names resolve to `Default`, the same tier an
    /// unset importance gets.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Name used on the command line and in the config file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Default => "default",
        }
    }

    /// Channel tier this importance is shown with
    pub const fn channel_importance(&self) -> ChannelImportance {
        match self {
            Self::Urgent => ChannelImportance::High,
            Self::High => ChannelImportance::Default,
            Self::Medium => ChannelImportance::Low,
            Self::Low => ChannelImportance::Min,
            Self::Default => ChannelImportance::Default,
        }
    }
}

impl FromStr for Importance {
    type Err = ImportanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "default" | "" => Ok(Self::Default),
            _ => Err(ImportanceParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance tier of a notification channel.
///
/// Discriminants are the `NotificationManager.IMPORTANCE_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ChannelImportance {
    /// No sound, hidden from the status bar, still listed in the shade
    Min = 1,
    /// No sound
    Low = 2,
    /// Sound
    Default = 3,
    /// Sound and heads-up display
    High = 4,
}

impl ChannelImportance {
    /// Raw `NotificationManager` constant
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }
}

impl From<Importance> for ChannelImportance {
    fn from(importance: Importance) -> Self {
        importance.channel_importance()
    }
}
