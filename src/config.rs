use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::progress::{DEFAULT_TASK_MINUTES, DEFAULT_TASK_XP};
use crate::error::DevotrackError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// XP credited by `task complete` when `--xp` is not given.
    pub default_xp: u32,
    /// Minutes credited by `task complete` when `--time` is not given.
    pub default_time_spent: u32,
    /// `tracing` filter used when `DEVOTRACK_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_xp: DEFAULT_TASK_XP,
            default_time_spent: DEFAULT_TASK_MINUTES,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read the config file. A missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self, DevotrackError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| DevotrackError::config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| DevotrackError::config(format!("{}: {e}", path.display())))
    }

    pub fn write(&self, path: &Path) -> Result<(), DevotrackError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DevotrackError::config(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| DevotrackError::config(format!("{}: {e}", path.display())))
    }
}
