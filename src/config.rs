//! Configuration management for todo-cli.
//!
//! This module handles the `settings.yaml` file in the data directory. The
//! file is optional; every setting has a default.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Make a newly created group the active group.
    #[serde(default)]
    pub switch_on_create: bool,

    /// Append every command to the event log in the data directory.
    #[serde(default)]
    pub debug_logging: bool,

    /// Diagnostics filter (e.g. "debug", "todo_cli=trace").
    /// `TODO_CLI_LOG` takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from a data directory, returning None if there is no
    /// settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(data_dir: &Path) -> Result<Option<Self>> {
        let path = paths::settings_path(data_dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        // An empty file deserializes as YAML null.
        let settings: Option<Self> = serde_yaml::from_str(&content)?;
        Ok(Some(settings.unwrap_or_default()))
    }

    /// Load settings, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(data_dir: &Path) -> Result<Self> {
        Ok(Self::load_from(data_dir)?.unwrap_or_default())
    }

    /// Save settings to a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(paths::settings_path(data_dir), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::load_from(dir.path()).unwrap().is_none());
        assert_eq!(Settings::load_or_default(dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            switch_on_create: true,
            debug_logging: true,
            log_level: Some("debug".to_string()),
        };
        settings.save_to(dir.path()).unwrap();

        assert_eq!(Settings::load_from(dir.path()).unwrap(), Some(settings));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::settings_path(dir.path()), "switch_on_create: true\n").unwrap();

        let settings = Settings::load_or_default(dir.path()).unwrap();
        assert!(settings.switch_on_create);
        assert!(!settings.debug_logging);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::settings_path(dir.path()), "").unwrap();

        assert_eq!(Settings::load_from(dir.path()).unwrap(), Some(Settings::default()));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::settings_path(dir.path()), "switch_on_create: [unclosed").unwrap();

        let err = Settings::load_from(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageFailure);
    }

    #[test]
    fn test_default_omits_log_level() {
        let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
        assert!(yaml.contains("switch_on_create: false"));
        assert!(!yaml.contains("log_level"));
    }
}
