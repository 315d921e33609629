//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_DIR_ENV};
use crate::export::ExportFormat;
use crate::models::HarmonyMode;
use crate::services::write_atomic;

/// Theme display mode preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Resolves the preference to dark (`true`) or light (`false`).
    ///
    /// `Auto` asks the OS through the `dark-light` crate and falls back to
    /// dark when detection is unavailable.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Mode used when there is no session yet
    #[serde(default)]
    pub default_mode: HarmonyMode,
}

/// Export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Format used when `--format` is omitted
    #[serde(default)]
    pub default_format: ExportFormat,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Print the readable text color next to each swatch
    #[serde(default = "default_show_contrast")]
    pub show_contrast: bool,
}

fn default_show_contrast() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_contrast: default_show_contrast(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyPalette/config.toml`
/// - macOS: `~/Library/Application Support/LazyPalette/config.toml`
/// - Windows: `%APPDATA%\LazyPalette\config.toml`
///
/// `LAZYPALETTE_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Generation defaults
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `LAZYPALETTE_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `LazyPalette`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(config_path, &content)
    }
}
