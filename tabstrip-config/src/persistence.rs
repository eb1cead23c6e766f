//! Settings persistence and path resolution.
//!
//! Covers:
//! - `load` / `save` (YAML at the XDG path, atomic write)
//! - `load_from` / `save_to` for explicit paths (tests, CLI `--settings`)
//! - `settings_path`, `config_dir`, `state_file_path`

use crate::error::ConfigError;
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tabstrip";
const SETTINGS_FILE: &str = "settings.yaml";
const STATE_FILE: &str = "collapsed_groups.json";

impl Settings {
    /// Load settings from the default path, creating the file with defaults
    /// when it does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path();
        log::info!("Settings path: {:?}", path);

        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save() {
                log::error!("Failed to save default settings: {}", e);
                return Err(e);
            }
            Ok(settings)
        }
    }

    /// Load settings from an explicit path. The result is always normalized.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    /// Parse settings from a YAML document. An empty document yields defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml_ng::from_str(contents)?;
        Ok(settings.normalized())
    }

    /// Save settings to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    /// Save settings to an explicit path.
    ///
    /// Writes to a temp file and renames it over the target so a crash never
    /// leaves a truncated settings file behind.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Path of the persisted collapsed-group state
    pub fn state_file_path() -> PathBuf {
        Self::config_dir().join(STATE_FILE)
    }
}
