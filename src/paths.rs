//! Path utilities for determining data storage locations.
//!
//! All data lives in one directory, `~/.config/todo-cli/` by default:
//! the state document, the settings file, and the optional event log.
//! Setting `TODO_CLI_HOME` points everything at a different directory.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const HOME_ENV_VAR: &str = "TODO_CLI_HOME";

/// The state document filename.
pub const STATE_FILENAME: &str = "config.json";

/// The settings filename.
pub const SETTINGS_FILENAME: &str = "settings.yaml";

/// The event log filename.
pub const EVENT_LOG_FILENAME: &str = "events.jsonl";

/// Get the data directory.
///
/// Returns `$TODO_CLI_HOME` if set and non-empty, otherwise
/// `~/.config/todo-cli/`. Returns `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    match std::env::var_os(HOME_ENV_VAR) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".config").join("todo-cli")),
    }
}

/// Path of the state document inside a data directory.
#[must_use]
pub fn state_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STATE_FILENAME)
}

/// Path of the settings file inside a data directory.
#[must_use]
pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILENAME)
}

/// Path of the event log inside a data directory.
#[must_use]
pub fn event_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(EVENT_LOG_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_data_dir_default_is_home_based() {
        std::env::remove_var(HOME_ENV_VAR);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(data_dir().unwrap(), home.join(".config").join("todo-cli"));
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_data_dir_env_override() {
        std::env::set_var(HOME_ENV_VAR, "/tmp/todo-elsewhere");
        assert_eq!(data_dir().unwrap(), PathBuf::from("/tmp/todo-elsewhere"));
        std::env::remove_var(HOME_ENV_VAR);
    }

    #[test]
    #[serial_test::serial]
    fn test_data_dir_empty_env_ignored() {
        std::env::set_var(HOME_ENV_VAR, "");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(data_dir().unwrap(), home.join(".config").join("todo-cli"));
        }
        std::env::remove_var(HOME_ENV_VAR);
    }

    #[test]
    fn test_file_paths() {
        let dir = PathBuf::from("/data");
        assert_eq!(state_path(&dir), PathBuf::from("/data/config.json"));
        assert_eq!(settings_path(&dir), PathBuf::from("/data/settings.yaml"));
        assert_eq!(event_log_path(&dir), PathBuf::from("/data/events.jsonl"));
    }
}
