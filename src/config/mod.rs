// SPDX-License-Identifier: MPL-2.0
//! This module handles the panel configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use panel_kit::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.visible_count = Some(4);
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
//! assert_eq!(loaded_config.visible_count, Some(4));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::profile::TabSet;
use crate::domain::ui::{SettleDelay, VisibleCount};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PanelKit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Gallery items shown side by side.
    #[serde(default)]
    pub visible_count: Option<usize>,
    /// Delay before the deferred tab measurement, in milliseconds.
    #[serde(default)]
    pub layout_settle_delay_ms: Option<u64>,
    /// Tab committed on mount.
    #[serde(default)]
    pub default_tab: Option<String>,
    /// Known tabs in display order.
    #[serde(default)]
    pub tabs: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visible_count: Some(DEFAULT_VISIBLE_COUNT),
            layout_settle_delay_ms: Some(DEFAULT_LAYOUT_SETTLE_DELAY_MS),
            default_tab: Some(DEFAULT_TAB.to_string()),
            tabs: None,
        }
    }
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if the document is not valid TOML
    /// or has fields of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Visible count, clamped to the supported range.
    #[must_use]
    pub fn visible_count(&self) -> VisibleCount {
        self.visible_count
            .map_or_else(VisibleCount::default, VisibleCount::new)
    }

    /// Settle delay, clamped to the supported range.
    #[must_use]
    pub fn settle_delay(&self) -> SettleDelay {
        self.layout_settle_delay_ms
            .map_or_else(SettleDelay::default, SettleDelay::from_millis)
    }

    /// Known tabs with the configured default applied.
    ///
    /// An empty or missing list falls back to the built-in tabs; an unknown
    /// default falls back to the first tab.
    #[must_use]
    pub fn tab_set(&self) -> TabSet {
        let tabs = self
            .tabs
            .as_ref()
            .and_then(|ids| TabSet::new(ids.iter().cloned()))
            .unwrap_or_default();

        match self.default_tab.as_deref() {
            Some(id) => tabs.clone().with_default(id).unwrap_or_else(|| {
                warn!(tab = id, "configured default tab is not a known tab");
                tabs
            }),
            None => tabs,
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
    Ok(Config::from_toml_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "ignoring malformed settings");
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
