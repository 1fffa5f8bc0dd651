//! Core traits for testability and abstraction.

use crate::error::Result;
use crate::todos::AppState;

/// Trait for persistent state storage.
///
/// The whole [`AppState`] is read and written as one document. The production
/// implementation is a JSON file; tests use an in-memory store.
pub trait StateStore {
    /// Load the current state.
    ///
    /// If no state has been saved yet, an empty state is created, persisted,
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be read or parsed.
    fn load(&self) -> Result<AppState>;

    /// Replace the stored state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written. On error the
    /// previously stored state is left in place.
    fn save(&self, state: &AppState) -> Result<()>;

    /// Load the state, apply `op`, and save the result.
    ///
    /// Nothing is written if `op` fails.
    ///
    /// # Errors
    ///
    /// Returns the error from loading, from `op`, or from saving.
    fn transact<T, F>(&self, op: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut AppState) -> Result<T>,
    {
        let mut state = self.load()?;
        let output = op(&mut state)?;
        self.save(&state)?;
        Ok(output)
    }
}
