//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving default generator
//! inputs in TOML format with platform-specific directory resolution.
//! Only inputs are stored here; computed tokens are never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{TypeScaleOptions, WcagLevel};

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base hue in degrees (220 = blue)
    pub base_hue: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { base_hue: 220.0 }
    }
}

/// Contrast check defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContrastConfig {
    /// Level checked when none is given on the command line
    pub level: WcagLevel,
    /// Ratio the suggestion search aims for; the level's requirement if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ratio: Option<f64>,
}

impl ContrastConfig {
    /// Target ratio for suggestions at `level`.
    #[must_use]
    pub fn target_for(&self, level: WcagLevel, is_large_text: bool) -> f64 {
        self.target_ratio
            .unwrap_or_else(|| level.required_ratio(is_large_text))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/tokensmith/config.toml`
/// - macOS: `~/Library/Application Support/tokensmith/config.toml`
/// - Windows: `%APPDATA%\tokensmith\config.toml`
///
/// `TOKENSMITH_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - typography ratio and base size must be positive
/// - `max_viewport` must exceed `min_viewport`
/// - `target_ratio`, when set, must lie in [1, 21]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Palette defaults
    pub palette: PaletteConfig,
    /// Type scale defaults
    pub typography: TypeScaleOptions,
    /// Contrast defaults
    pub contrast: ContrastConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `TOKENSMITH_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `tokensmith`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

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
    ///
    /// A missing file yields the defaults; missing keys take their defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
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

        config.validate()?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.typography
            .validate()
            .context("Invalid [typography] settings")?;

        if let Some(target) = self.contrast.target_ratio {
            if !(1.0..=21.0).contains(&target) {
                anyhow::bail!("Invalid [contrast] target_ratio {target}: must be between 1 and 21");
            }
        }

        Ok(())
    }
}
