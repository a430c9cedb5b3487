// SPDX-License-Identifier: GPL-3.0-only

//! User configuration handling
//!
//! Persists the cross-session filter-change count and the last selected
//! filter as JSON under the user config directory.

use crate::filters::FilterKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of filter changes across all sessions (drives the review prompt)
    pub filter_count: u32,
    /// Filter selected when the app last ran
    pub last_filter: Option<FilterKind>,
    /// Where the review prompt points
    pub review_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter_count: 0,
            last_filter: None,
            review_url: "https://github.com/darkroom-app/darkroom".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists on this system
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("darkroom").join("config.json"))
    }

    /// Load the config, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "Invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save the config
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, raw)
    }
}
