//! Runtime settings
//!
//! Read from a JSON file next to the binary (native) or left at defaults
//! (web). Every field is optional in the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::levels::LevelTable;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
    /// JSON level table to use instead of the built-in one
    pub levels_path: Option<PathBuf>,
    /// High score file (native only; platform data dir when absent)
    pub high_score_path: Option<PathBuf>,

    // === Headless demo ===
    /// Tick budget for the native demo run
    pub demo_max_ticks: u64,
    /// Let the built-in autopilot jump over hazards
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            levels_path: None,
            high_score_path: None,
            demo_max_ticks: 60 * 60 * 5,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "capy-run.json";

    /// Parse settings JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `capy-run.json` from the working directory; a missing or
    /// unreadable file falls back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::FILE_NAME);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::FILE_NAME);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", Self::FILE_NAME, e);
                Self::default()
            }
        }
    }

    /// Web builds have no settings file
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    /// Level table named by `levels_path`, or the built-in one.
    ///
    /// Unlike the settings file itself, a bad level table is an error: the
    /// game cannot run on an invalid table.
    pub fn level_table(&self) -> Result<LevelTable, ConfigError> {
        match &self.levels_path {
            None => Ok(LevelTable::default()),
            Some(path) => {
                let json =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.display().to_string(),
                        source,
                    })?;
                let table = LevelTable::from_json(&json)?;
                log::info!("Loaded {} levels from {}", table.len(), path.display());
                Ok(table)
            }
        }
    }
}
