//! # User Settings
//!
//! Preferences shared by the CLI and the GUI. Stored as JSON in the per-user
//! config directory (or wherever `--config` points).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "notation": "eu",
//!   "mode": "decimal",
//!   "autoplay_interval_ms": 1500,
//!   "show_all_steps": false
//! }
//! ```
//!
//! Missing keys take their defaults, so an empty object is a valid file.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::division::DivisionMode;
use crate::notation::Notation;

/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 2000;

/// Shortest interval accepted, so autoplay stays readable.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Notation used when none is given on the command line
    pub notation: Notation,

    /// Division mode used when none is given
    pub mode: DivisionMode,

    /// Delay between autoplay steps, in milliseconds
    pub autoplay_interval_ms: u64,

    /// `solve` prints every step instead of only the final board
    pub show_all_steps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            notation: Notation::default(),
            mode: DivisionMode::default(),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            show_all_steps: false,
        }
    }
}

impl Settings {
    /// Autoplay interval, clamped to [`MIN_AUTOPLAY_INTERVAL_MS`].
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS))
    }

    /// `settings.json` in the platform config directory, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "longdiv").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.notation, Notation::Us);
        assert_eq!(settings.mode, DivisionMode::Integer);
        assert_eq!(settings.autoplay_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"notation":"ger"}"#).unwrap();
        assert_eq!(settings.notation, Notation::German);
        assert_eq!(settings.autoplay_interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert!(!settings.show_all_steps);
    }

    #[test]
    fn test_interval_is_clamped() {
        let settings = Settings {
            autoplay_interval_ms: 5,
            ..Settings::default()
        };
        assert_eq!(settings.autoplay_interval(), Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = Settings::default_path() {
            assert!(path.ends_with(SETTINGS_FILE));
        }
    }
}
