// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! snackbar preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.snackbar.auto_dismiss_delay_ms = 3_000;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Build snackbar options from it
//! let options = config.snackbar_options();
//! assert_eq!(options.auto_dismiss_delay.as_millis(), 3_000);
//! ```

pub mod defaults;

use crate::domain::{DampingRatio, Insets, MinHeight};
use crate::error::Result;
use crate::snackbar::{layout, SnackbarOptions};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

/// Edge insets as stored in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetsConfig {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl From<Insets> for InsetsConfig {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.top,
            left: insets.left,
            bottom: insets.bottom,
            right: insets.right,
        }
    }
}

impl From<InsetsConfig> for Insets {
    fn from(config: InsetsConfig) -> Self {
        Insets::new(config.top, config.left, config.bottom, config.right)
    }
}

/// `[snackbar]` section of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnackbarConfig {
    pub margins: InsetsConfig,
    pub content_inset: InsetsConfig,
    /// Falls back to the process-wide default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    pub animation_duration_ms: u64,
    pub damping_ratio: f32,
    pub initial_velocity: f32,
    pub auto_dismiss_delay_ms: u64,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            margins: defaults::MARGINS.into(),
            content_inset: defaults::CONTENT_INSET.into(),
            min_height: None,
            animation_duration_ms: defaults::ANIMATION_DURATION.as_millis() as u64,
            damping_ratio: defaults::DAMPING_RATIO,
            initial_velocity: defaults::INITIAL_VELOCITY,
            auto_dismiss_delay_ms: defaults::AUTO_DISMISS_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

impl Config {
    /// Builds snackbar options, clamping out-of-range values.
    #[must_use]
    pub fn snackbar_options(&self) -> SnackbarOptions {
        let section = &self.snackbar;
        let min_height = section
            .min_height
            .map_or_else(layout::default_min_height, MinHeight::new);

        SnackbarOptions::default()
            .margins(section.margins.into())
            .content_inset(section.content_inset.into())
            .min_height(min_height)
            .animation_duration(Duration::from_millis(
                section
                    .animation_duration_ms
                    .min(defaults::MAX_ANIMATION_DURATION_MS),
            ))
            .spring(
                DampingRatio::new(section.damping_ratio),
                section.initial_velocity,
            )
            .auto_dismiss_delay(Duration::from_millis(
                section
                    .auto_dismiss_delay_ms
                    .min(defaults::MAX_AUTO_DISMISS_DELAY_MS),
            ))
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

/// Parses settings from TOML text.
pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads the settings at `path`. Malformed TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match parse(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
