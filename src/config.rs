//! Configuration management
//!
//! Settings live in `<config dir>/autocue/config.toml`. The path can be
//! overridden with the `AUTOCUE_CONFIG` environment variable. A missing file
//! means defaults, and missing fields fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::MediaType;
use crate::sync::{BorderPolicy, ContextLines, SessionOptions};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "AUTOCUE_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Playback and synchronization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Lines selected beyond the requested span: "all", "none" or a count
    #[serde(default)]
    pub context_lines: ContextLines,
    /// Window the dimmed edge lines follow: "initial" or "live"
    #[serde(default)]
    pub border_policy: BorderPolicy,
    /// Interval between time updates in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_tick_interval_ms() -> u64 {
    250
}

fn default_speed() -> f64 {
    1.0
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            context_lines: ContextLines::default(),
            border_policy: BorderPolicy::default(),
            tick_interval_ms: default_tick_interval_ms(),
            speed: default_speed(),
        }
    }
}

/// Where media files are resolved from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_media_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub media_type: MediaType,
}

fn default_media_root() -> PathBuf {
    PathBuf::from("media")
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: default_media_root(),
            media_type: MediaType::default(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when RUST_LOG is unset (e.g. "warn", "autocue=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; required to see logs while the terminal view is open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("autocue").join("config.toml"))
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`, using defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    /// Save the config to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Clamp values into their supported ranges.
    fn normalize(&mut self) {
        self.playback.speed = if self.playback.speed.is_finite() {
            self.playback.speed.clamp(0.1, 16.0)
        } else {
            default_speed()
        };
        self.playback.tick_interval_ms = self.playback.tick_interval_ms.clamp(10, 5_000);
    }

    /// Session options derived from this config.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            context_lines: self.playback.context_lines,
            border_policy: self.playback.border_policy,
            media_root: self.media.root.clone(),
            media_type: self.media.media_type,
        }
    }
}
