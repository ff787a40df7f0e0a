//! Configuration management
//!
//! Settings live in `<config dir>/readalong/config.toml`. Every section and
//! field is optional; anything missing falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_WORDS_PER_MINUTE;
use crate::markdown::DEFAULT_MAX_CONSECUTIVE_NEWLINES;
use crate::sync::{LookupStrategy, SeparatorMode};

/// Errors raised while locating or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sync: SyncConfig,
    pub markdown: MarkdownConfig,
    pub playback: PlaybackConfig,
}

/// Word/time index settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub separator_mode: SeparatorMode,
    pub lookup: LookupStrategy,
}

/// Markdown cleanup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub max_consecutive_newlines: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            max_consecutive_newlines: DEFAULT_MAX_CONSECUTIVE_NEWLINES,
        }
    }
}

/// Simulated playback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Interval between time updates, in milliseconds
    pub tick_ms: u64,
    /// Initial playback speed
    pub speed: f64,
    /// Speaking rate for estimating durations
    pub words_per_minute: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            speed: 1.0,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("readalong").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
