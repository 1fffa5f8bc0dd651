//! Testing utilities and mock implementations.
//!
//! These types are provided for use in tests. They may appear unused in
//! the library itself but are consumed by unit and integration tests.

#![allow(dead_code)]

use crate::error::{Error, Result};
use crate::todos::AppState;
use crate::traits::StateStore;
use std::cell::{Cell, RefCell};

/// An in-memory state store.
///
/// Starts out with no saved state; the first `load` creates an empty one,
/// just like the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<AppState>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `state`.
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self { state: RefCell::new(Some(state)), saves: Cell::new(0) }
    }

    /// The currently stored state, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<AppState> {
        self.state.borrow().clone()
    }

    /// How many times `save` was called (not counting the initial creation).
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<AppState> {
        let mut slot = self.state.borrow_mut();
        Ok(slot.get_or_insert_with(AppState::default).clone())
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.state.borrow_mut() = Some(state.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// A store whose loads succeed but whose saves always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    state: AppState,
}

impl FailingStore {
    /// Create a failing store that loads `state`.
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl StateStore for FailingStore {
    fn load(&self) -> Result<AppState> {
        Ok(self.state.clone())
    }

    fn save(&self, _state: &AppState) -> Result<()> {
        Err(Error::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only store")))
    }
}
