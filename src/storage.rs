//! JSON file storage for the application state.
//!
//! The whole state is one pretty-printed JSON document, by default at
//! `~/.config/todo-cli/config.json`:
//!
//! ```json
//! {
//!   "groups": [{ "id": "…", "name": "work" }],
//!   "active_group": "work",
//!   "todos": [{ "id": "1", "group": "work", "urgency": 3, "task": "…", "completed": false }]
//! }
//! ```
//!
//! Saves go to a sibling temporary file that is then renamed over the
//! document, so a failed save never leaves a partially written file.
//!
//! Saving a loaded document reproduces it byte for byte only when this store
//! wrote it. Documents from older tools are normalized on the first save:
//! `null` arrays become `[]` and escapes such as `\u0026` are written as the
//! plain character.

use crate::error::{Error, Result};
use crate::paths;
use crate::todos::AppState;
use crate::traits::StateStore;
use std::path::{Path, PathBuf};

/// File-backed state store.
///
/// Every call reads or writes the file; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the state document.
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the document at `path`.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Create a store for the state document in a data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(paths::state_path(data_dir))
    }

    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn open_default() -> Result<Self> {
        let dir = paths::data_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self::in_dir(&dir))
    }

    /// Get the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_document(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        let temp = self.temp_path();
        if let Err(e) = std::fs::write(&temp, content) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<AppState> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "creating empty state document");
            let state = AppState::default();
            self.write_document(&state)?;
            return Ok(state);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let state: AppState = serde_json::from_str(&content).map_err(|e| Error::CorruptState {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!(
            path = %self.path.display(),
            groups = state.groups.len(),
            todos = state.todos.len(),
            "loaded state"
        );
        Ok(state)
    }

    fn save(&self, state: &AppState) -> Result<()> {
        self.write_document(state)?;
        tracing::debug!(
            path = %self.path.display(),
            groups = state.groups.len(),
            todos = state.todos.len(),
            "saved state"
        );
        Ok(())
    }
}
