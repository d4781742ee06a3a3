// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[motion]` - Animation speed and reduced-motion preference
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! Invalid TOML degrades to defaults instead of aborting startup: a broken
//! settings file must never keep the page from rendering.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";
const CONFIG_DIR_ENV: &str = "ICED_FOLIO_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Animation behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Skip reveal and entrance animations entirely.
    #[serde(
        default = "default_reduced_motion",
        skip_serializing_if = "Option::is_none"
    )]
    pub reduced_motion: Option<bool>,

    /// Duration multiplier for all animations (0.25-4.0).
    #[serde(
        default = "default_speed_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub speed_factor: Option<f32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: Some(DEFAULT_REDUCED_MOTION),
            speed_factor: Some(DEFAULT_SPEED_FACTOR),
        }
    }
}

impl MotionConfig {
    /// Speed factor with the range guard applied, so persisted configs
    /// cannot request nonsensical multipliers.
    #[must_use]
    pub fn effective_speed_factor(&self) -> f32 {
        self.speed_factor
            .filter(|f| f.is_finite())
            .map(|f| f.clamp(MIN_SPEED_FACTOR, MAX_SPEED_FACTOR))
            .unwrap_or(DEFAULT_SPEED_FACTOR)
    }

    #[must_use]
    pub fn effective_reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(DEFAULT_REDUCED_MOTION)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Config {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return config,
                Err(err) => {
                    tracing::warn!(%err, ?path, "could not read settings, using defaults");
                }
            }
        }
    }
    Config::default()
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid settings file, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            motion: MotionConfig {
                reduced_motion: Some(true),
                speed_factor: Some(2.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"light\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.motion, MotionConfig::default());
    }

    #[test]
    fn effective_speed_factor_clamps_persisted_values() {
        let wild = MotionConfig {
            reduced_motion: None,
            speed_factor: Some(100.0),
        };
        assert_abs_diff_eq!(wild.effective_speed_factor(), MAX_SPEED_FACTOR);

        let nan = MotionConfig {
            reduced_motion: None,
            speed_factor: Some(f32::NAN),
        };
        assert_abs_diff_eq!(nan.effective_speed_factor(), DEFAULT_SPEED_FACTOR);
    }

    #[test]
    fn default_motion_plays_animations() {
        let motion = MotionConfig::default();
        assert!(!motion.effective_reduced_motion());
        assert_abs_diff_eq!(motion.effective_speed_factor(), DEFAULT_SPEED_FACTOR);
    }
}
