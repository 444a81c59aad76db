//! Configuration structs with defaults and TOML persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stardrift_core::{CellMetrics, FloaterSettings, StarfieldSettings};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::paths::config_path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed random seed. A fresh seed is drawn each run when unset.
    pub seed: Option<u64>,
    /// Display settings.
    pub display: DisplayConfig,
    /// Starfield effect settings.
    pub starfield: StarfieldSettings,
    /// Floating icon settings.
    pub floaters: FloaterSettings,
    /// Logging settings.
    pub log: LogConfig,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixels per terminal cell, horizontally.
    pub cell_width: f32,
    /// Pixels per terminal cell, vertically.
    pub cell_height: f32,
    /// Target frames per second.
    pub fps: u32,
    /// Banner text.
    pub title: String,
    /// Line shown under the banner.
    pub tagline: String,
    /// Draw the banner overlay.
    pub show_banner: bool,
    /// Draw the nebula glow behind the stars.
    pub show_nebula: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let cells = CellMetrics::default();
        Self {
            cell_width: cells.cell_width,
            cell_height: cells.cell_height,
            fps: 60,
            title: "SUMANTH.PAILA".to_string(),
            tagline: "Machine Learning Engineer & Data Analyst".to_string(),
            show_banner: true,
            show_nebula: true,
        }
    }
}

impl DisplayConfig {
    /// Cell size as [`CellMetrics`].
    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }

    /// Frame interval in milliseconds, never below one.
    pub fn frame_interval_ms(&self) -> u64 {
        (1000 / u64::from(self.fps.max(1))).max(1)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "stardrift_background=debug".
    /// "off" disables logging.
    pub level: String,
    /// Log file. Defaults to `stardrift.log` in the platform data directory.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, falling back to defaults when the file does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }
}
