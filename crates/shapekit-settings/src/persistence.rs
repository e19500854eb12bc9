//! Settings Persistence
//!
//! Locates the platform configuration directory and loads the editor
//! configuration from it, falling back to defaults when nothing usable is
//! found.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "shapekit";
const CONFIG_FILE: &str = "config.toml";

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the ShapeKit configuration
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Full path of the default configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self { config })
    }

    /// Load from `path` if it exists and is valid, otherwise use defaults.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::new();
        }
        match Self::load_from_file(path) {
            Ok(persistence) => {
                info!("Loaded config from {}", path.display());
                persistence
            }
            Err(e) => {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Load from the platform config directory, otherwise use defaults.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!("{}", e);
                Self::new()
            }
        }
    }

    /// Save settings to file, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }
        self.config.save_to_file(path)
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = SettingsPersistence::load_or_default_from(&dir.path().join("none.toml"));
        assert_eq!(persistence.config(), &Config::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shapes]\nbevel_length = 4.0\n").unwrap();

        let persistence = SettingsPersistence::load_or_default_from(&path);
        assert_eq!(persistence.config().shapes.bevel_length, 0.2);
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shapekit").join("config.toml");

        let mut persistence = SettingsPersistence::new();
        persistence.config_mut().shapes.square_size = 0.5;
        persistence.save_to_file(&path).unwrap();

        let loaded = SettingsPersistence::load_from_file(&path).unwrap();
        assert_eq!(loaded.config().shapes.square_size, 0.5);
    }
}
