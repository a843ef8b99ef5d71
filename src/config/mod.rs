// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional in the file; accessors fall back to the constants
//! in [`defaults`] and clamp out-of-range values.
//!
//! # Examples
//!
//! ```no_run
//! use vitrine::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vitrine";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub gap: Option<f32>,
    #[serde(default)]
    pub container_width: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub header_offset: Option<f32>,
    #[serde(default)]
    pub header_scroll_threshold: Option<f32>,
    #[serde(default)]
    pub reveal_ratio: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default)]
    pub type_interval_ms: Option<u64>,
    #[serde(default)]
    pub delete_interval_ms: Option<u64>,
    #[serde(default)]
    pub hold_ms: Option<u64>,
    #[serde(default)]
    pub counter_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            carousel: CarouselConfig {
                gap: Some(DEFAULT_CAROUSEL_GAP),
                container_width: Some(DEFAULT_CONTAINER_WIDTH),
            },
            page: PageConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

impl Config {
    /// Card gap, clamped to `0..=MAX_CAROUSEL_GAP`.
    #[must_use]
    pub fn carousel_gap(&self) -> f32 {
        finite_or(self.carousel.gap, DEFAULT_CAROUSEL_GAP).clamp(0.0, MAX_CAROUSEL_GAP)
    }

    #[must_use]
    pub fn container_width(&self) -> f32 {
        finite_or(self.carousel.container_width, DEFAULT_CONTAINER_WIDTH).max(0.0)
    }

    #[must_use]
    pub fn header_offset(&self) -> f32 {
        finite_or(self.page.header_offset, DEFAULT_HEADER_OFFSET).max(0.0)
    }

    #[must_use]
    pub fn header_scroll_threshold(&self) -> f32 {
        finite_or(
            self.page.header_scroll_threshold,
            DEFAULT_HEADER_SCROLL_THRESHOLD,
        )
        .max(0.0)
    }

    #[must_use]
    pub fn reveal_ratio(&self) -> f32 {
        finite_or(self.page.reveal_ratio, DEFAULT_REVEAL_RATIO)
            .clamp(MIN_REVEAL_RATIO, MAX_REVEAL_RATIO)
    }

    #[must_use]
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(
            self.effects
                .type_interval_ms
                .unwrap_or(DEFAULT_TYPE_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(
            self.effects
                .delete_interval_ms
                .unwrap_or(DEFAULT_DELETE_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.effects.hold_ms.unwrap_or(DEFAULT_HOLD_MS))
    }

    #[must_use]
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(
            self.effects
                .counter_duration_ms
                .unwrap_or(DEFAULT_COUNTER_DURATION_MS),
        )
    }
}

fn finite_or(value: Option<f32>, default: f32) -> f32 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings file from the platform config directory, or the
/// defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// # Errors
///
/// Returns an error if the directory or the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. Invalid TOML yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
