use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::feedback::DEFAULT_FEEDBACK_DURATION;
use crate::core::palette::Palette;

/// Length of one heading animation when `animation_millis` is unset.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// Heading color used when no color is chosen, as `#rrggbb`
    pub default_color: Option<String>,
    /// How long the feedback message stays visible, in seconds
    pub feedback_seconds: Option<u64>,
    /// How long one heading animation plays, in milliseconds
    pub animation_millis: Option<u64>,
    /// Per-key color overrides
    /// Key: color key (e.g., "blue")
    /// Value: hex color (e.g., "#1e90ff")
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn palette(&self) -> Palette {
        Palette::with_overrides(
            self.colors
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
            self.default_color.as_deref(),
        )
    }

    pub fn feedback_duration(&self) -> Duration {
        self.feedback_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FEEDBACK_DURATION)
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_millis
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_ANIMATION_DURATION)
    }

    pub fn theme_name(&self) -> &str {
        self.theme.as_deref().unwrap_or("dark")
    }
}
