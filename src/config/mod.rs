// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo application's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! The preferences cover presentation defaults only: how long a toast stays
//! on screen and how far it rests from the screen edges. Callers can always
//! override the duration per toast; the insets apply to every presentation.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_duration_secs = Some(5.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Auto-dismiss delay applied when a toast does not specify one, in seconds.
pub const DEFAULT_DURATION_SECS: f32 = 3.0;
/// Distance between a top-located toast and the top screen edge.
pub const DEFAULT_TOP_INSET: f32 = 50.0;
/// Distance between a bottom-located toast and the bottom screen edge.
pub const DEFAULT_BOTTOM_INSET: f32 = 40.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_duration_secs: Option<f32>,
    #[serde(default)]
    pub top_inset: Option<f32>,
    #[serde(default)]
    pub bottom_inset: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_secs: Some(DEFAULT_DURATION_SECS),
            top_inset: Some(DEFAULT_TOP_INSET),
            bottom_inset: Some(DEFAULT_BOTTOM_INSET),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            default_duration_secs: Some(1.5),
            top_inset: Some(64.0),
            bottom_inset: Some(24.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.default_duration_secs, config.default_duration_secs);
        assert_eq!(loaded.top_inset, config.top_inset);
        assert_eq!(loaded.bottom_inset, config.bottom_inset);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.default_duration_secs, Some(DEFAULT_DURATION_SECS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_matches_reference_values() {
        let config = Config::default();
        assert_eq!(config.default_duration_secs, Some(3.0));
        assert_eq!(config.top_inset, Some(50.0));
        assert_eq!(config.bottom_inset, Some(40.0));
    }
}
