//! Application settings.
//!
//! Read once at startup from a TOML file in the user's config directory.
//! Settings are never written back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General behaviour.
    pub general: GeneralSettings,

    /// Simulated delays.
    pub timing: TimingSettings,

    /// User shown in the drawer footer and on the dashboard.
    pub profile: ProfileSettings,
}

/// Failed to load settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The file exists but could not be read.
    #[error("Failed to read settings from {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The file is not valid settings TOML.
    #[error("Invalid settings in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

impl Settings {
    /// Load settings from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        toml::from_str(&content).map_err(|err| SettingsError::Parse {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }

    /// Load settings from `path`, logging and discarding any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            warn!(%err, "settings ignored, using defaults");
            Self::default()
        })
    }

    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("id.ac", "UGM", "SPARK")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// GENERAL
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Login skips validation and the auth call and succeeds immediately.
    pub demo_direct_login: bool,
}

// =============================================================================
// TIMING
// =============================================================================

/// Simulated delays in milliseconds.
///
/// Keys carry an `_ms` suffix; the bare names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    #[serde(alias = "drawer_close")]
    pub drawer_close_ms: u64,
    #[serde(alias = "login")]
    pub login_ms: u64,
    #[serde(alias = "register")]
    pub register_ms: u64,
    #[serde(alias = "reset_password")]
    pub reset_password_ms: u64,
    #[serde(alias = "logout")]
    pub logout_ms: u64,
    #[serde(alias = "history")]
    pub history_ms: u64,
    #[serde(alias = "live_parking")]
    pub live_parking_ms: u64,
    #[serde(alias = "parking_status")]
    pub parking_status_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            drawer_close_ms: 120,
            login_ms: 600,
            register_ms: 900,
            reset_password_ms: 800,
            logout_ms: 600,
            history_ms: 300,
            live_parking_ms: 250,
            parking_status_ms: 0,
        }
    }
}

impl TimingSettings {
    pub fn drawer_close(&self) -> Duration {
        Duration::from_millis(self.drawer_close_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn reset_password(&self) -> Duration {
        Duration::from_millis(self.reset_password_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }

    pub fn history(&self) -> Duration {
        Duration::from_millis(self.history_ms)
    }

    pub fn live_parking(&self) -> Duration {
        Duration::from_millis(self.live_parking_ms)
    }

    pub fn parking_status(&self) -> Duration {
        Duration::from_millis(self.parking_status_ms)
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Barbara Neanake".to_string(),
            email: "barbaraneanake@ugm.ac.id".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [general]
            demo_direct_login = true

            [timing]
            login_ms = 10
            "#,
        )
        .unwrap();

        assert!(settings.general.demo_direct_login);
        assert_eq!(settings.timing.login(), Duration::from_millis(10));
        assert_eq!(settings.timing.register_ms, 900);
        assert_eq!(settings.profile, ProfileSettings::default());
    }

    #[test]
    fn bare_timing_keys_are_milliseconds() {
        let settings = Settings::from_toml_str(
            r#"
            [timing]
            login = 5
            drawer_close = 7
            "#,
        )
        .unwrap();

        assert_eq!(settings.timing.login(), Duration::from_millis(5));
        assert_eq!(settings.timing.drawer_close(), Duration::from_millis(7));
        assert_eq!(settings.timing.logout_ms, 600);
    }

    #[test]
    fn demo_login_is_off_by_default() {
        assert!(!Settings::default().general.demo_direct_login);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("spark-settings-does-not-exist.toml");
        assert_eq!(Settings::load_from(&path), Ok(Settings::default()));
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("spark-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[timing\nlogin_ms = ").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        std::fs::remove_file(&path).ok();
    }
}
