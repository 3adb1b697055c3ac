// SPDX-License-Identifier: MPL-2.0
//! Portal preferences persisted as `settings.toml` in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Delivery channels and per-event switches
//! - `[regional]` - Date format, currency, unit system and timezone
//! - `[session]` - Simulated login/registration delays
//!
//! Business records are never written here; only preferences are.
//!
//! # Examples
//!
//! ```no_run
//! use logi_portal::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("nl".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::settings::{Currency, DateFormat, Timezone, UnitSystem};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "nl").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Notification preferences from the Settings > Notifications sub-tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotificationConfig {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub order_updates: bool,
    pub shipment_delays: bool,
    pub inventory_alerts: bool,
    pub document_uploads: bool,
    pub system_maintenance: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            order_updates: true,
            shipment_delays: true,
            inventory_alerts: true,
            document_uploads: true,
            system_maintenance: true,
        }
    }
}

/// Regional formatting preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RegionalConfig {
    pub date_format: DateFormat,
    pub currency: Currency,
    pub unit_system: UnitSystem,
    pub timezone: Timezone,
}

/// Simulated request latency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(
        default = "default_login_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub login_delay_ms: Option<u64>,

    #[serde(
        default = "default_register_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub register_delay_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            register_delay_ms: default_register_delay_ms(),
        }
    }
}

impl SessionConfig {
    /// Login delay, clamped to [`MAX_SESSION_DELAY_MS`].
    #[must_use]
    pub fn login_delay(&self) -> Duration {
        clamp_delay(self.login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS))
    }

    /// Registration delay, clamped to [`MAX_SESSION_DELAY_MS`].
    #[must_use]
    pub fn register_delay(&self) -> Duration {
        clamp_delay(self.register_delay_ms.unwrap_or(DEFAULT_REGISTER_DELAY_MS))
    }
}

fn clamp_delay(ms: u64) -> Duration {
    Duration::from_millis(ms.min(MAX_SESSION_DELAY_MS))
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub regional: RegionalConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_login_delay_ms() -> Option<u64> {
    Some(DEFAULT_LOGIN_DELAY_MS)
}

fn default_register_delay_ms() -> Option<u64> {
    Some(DEFAULT_REGISTER_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the config and, if the file exists but could not be used, the
/// error to show the user. Defaults stand in for an unusable file.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (Config::default(), Some(err));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationConfig {
                sms: true,
                document_uploads: false,
                ..NotificationConfig::default()
            },
            regional: RegionalConfig {
                date_format: DateFormat::YearMonthDay,
                currency: Currency::Gbp,
                unit_system: UnitSystem::Imperial,
                timezone: Timezone::London,
            },
            session: SessionConfig {
                login_delay_ms: Some(250),
                register_delay_ms: Some(0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"de\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("de"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.notifications, NotificationConfig::default());
        assert_eq!(loaded.regional, RegionalConfig::default());
        assert_eq!(loaded.session.login_delay_ms, Some(DEFAULT_LOGIN_DELAY_MS));
    }

    #[test]
    fn partial_notification_section_keeps_other_defaults() {
        let loaded: Config = toml::from_str("[notifications]\nemail = false\n").expect("parse");
        assert!(!loaded.notifications.email);
        assert!(loaded.notifications.push);
        assert!(!loaded.notifications.sms);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.notifications.email);
        assert!(config.notifications.push);
        assert!(!config.notifications.sms);
        assert_eq!(config.regional.date_format, DateFormat::DayMonthYear);
        assert_eq!(config.regional.currency, Currency::Eur);
        assert_eq!(config.regional.timezone, Timezone::Amsterdam);
        assert_eq!(config.session.login_delay(), Duration::from_millis(1000));
        assert_eq!(config.session.register_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn oversized_delays_are_clamped() {
        let session = SessionConfig {
            login_delay_ms: Some(60_000),
            register_delay_ms: None,
        };
        assert_eq!(
            session.login_delay(),
            Duration::from_millis(MAX_SESSION_DELAY_MS)
        );
        assert_eq!(
            session.register_delay(),
            Duration::from_millis(DEFAULT_REGISTER_DELAY_MS)
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_reports_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(matches!(warning, Some(Error::Config(_))));
        assert_eq!(warning.map(|err| err.i18n_key()), Some("error-config"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }
}
