// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's persisted settings, including loading and
//! saving them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use overlay_container::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Raise verbosity to see every dispatched view
//! config.debug_level = Some(2);
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
//! assert_eq!(loaded_config.debug_level, Some(2));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::container::{ChannelCapacity, CleanupDelay};
use crate::domain::diagnostics::DebugLevel;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "OverlayContainer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_enabled: Option<bool>,
    #[serde(default)]
    pub debug_level: Option<u8>,
    #[serde(default)]
    pub cleanup_delay_ms: Option<u64>,
    #[serde(default)]
    pub channel_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_enabled: Some(DEFAULT_LOG_ENABLED),
            debug_level: Some(DEFAULT_DEBUG_LEVEL),
            cleanup_delay_ms: Some(DEFAULT_CLEANUP_DELAY_MS),
            channel_capacity: Some(DEFAULT_CHANNEL_CAPACITY),
        }
    }
}

impl Config {
    /// Returns whether logging is enabled, falling back to the default.
    #[must_use]
    pub fn log_enabled(&self) -> bool {
        self.log_enabled.unwrap_or(DEFAULT_LOG_ENABLED)
    }

    /// Returns the validated verbosity threshold.
    #[must_use]
    pub fn debug_level(&self) -> DebugLevel {
        self.debug_level.map(DebugLevel::new).unwrap_or_default()
    }

    /// Returns the validated cleanup delay.
    #[must_use]
    pub fn cleanup_delay(&self) -> CleanupDelay {
        self.cleanup_delay_ms
            .map(CleanupDelay::from_millis)
            .unwrap_or_default()
    }

    /// Returns the validated per-container channel capacity.
    #[must_use]
    pub fn channel_capacity(&self) -> ChannelCapacity {
        self.channel_capacity
            .map(ChannelCapacity::new)
            .unwrap_or_default()
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

/// Reads settings from `path`.
///
/// Unparseable content falls back to defaults; only I/O failures are errors.
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
