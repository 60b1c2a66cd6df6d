// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[intake]` - Which files the drop zone accepts
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or the `ICED_INTAKE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_intake::config::{self, AcceptMode};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.intake.accept = AcceptMode::Rules;
//! config.intake.max_file_size_mb = Some(10);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::intake::MaxFileSize;
use crate::error::Result;
use crate::intake::AcceptRules;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// How the drop zone decides whether to take a file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AcceptMode {
    /// Every readable file is taken.
    #[default]
    Any,
    /// Only files matching `extensions` and `max_file_size_mb`.
    Rules,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
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

/// Drop zone acceptance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeConfig {
    #[serde(default)]
    pub accept: AcceptMode,

    /// Allowed extensions when `accept = "rules"`. Defaults to common image formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Size limit in megabytes when `accept = "rules"`. Written as `0` in
    /// `settings.toml` when there is no limit; a missing key means the default.
    #[serde(
        default = "default_max_file_size_mb",
        serialize_with = "serialize_size_limit",
        deserialize_with = "deserialize_size_limit"
    )]
    pub max_file_size_mb: Option<u32>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accept: AcceptMode::default(),
            extensions: None,
            max_file_size_mb: default_max_file_size_mb(),
        }
    }
}

impl IntakeConfig {
    /// Acceptance rules for this section, or `None` when every file is taken.
    #[must_use]
    pub fn accept_rules(&self) -> Option<AcceptRules> {
        if self.accept == AcceptMode::Any {
            return None;
        }

        let rules = match &self.extensions {
            Some(extensions) => AcceptRules::new().with_extensions(extensions),
            None => AcceptRules::images(),
        };

        Some(match self.max_file_size_mb {
            Some(mb) => rules.with_max_size(MaxFileSize::new(mb)),
            None => rules,
        })
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub intake: IntakeConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_max_file_size_mb() -> Option<u32> {
    Some(DEFAULT_MAX_FILE_SIZE_MB)
}

fn serialize_size_limit<S>(limit: &Option<u32>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u32(limit.unwrap_or(0))
}

fn deserialize_size_limit<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let megabytes = u32::deserialize(deserializer)?;
    Ok((megabytes > 0).then_some(megabytes))
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

// =============================================================================
// Load / Save
// =============================================================================

/// `settings.toml` inside the resolved config directory.
fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Never fails: a missing file gives the defaults, an unreadable or invalid
/// one gives the defaults plus the i18n key of a warning toast.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            log::debug!("loaded settings from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("ignoring {}: {err}", path.display());
            (
                Config::default(),
                Some(CONFIG_LOAD_WARNING_KEY.to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// Does nothing when no config directory can be resolved.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
