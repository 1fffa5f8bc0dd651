//! Todo tracking core.
//!
//! This module holds the data model and every operation on it:
//! - Todos with a task, an urgency (1-5), a completion flag, and a group
//! - Named groups, with an implicit always-present `default` group
//! - An active group that new todos fall into and plain listings show
//! - Filtering and ordering for display
//!
//! All operations work on an in-memory [`AppState`]; loading and saving is
//! the job of a [`StateStore`](crate::traits::StateStore).
//!
//! # Example
//!
//! ```
//! use todo_cli::todos::{AppState, TodoFilter};
//!
//! let mut state = AppState::default();
//! state.create_group("work", false).unwrap();
//! state.switch_active_group("work").unwrap();
//!
//! let todo = state.add_todo("Write report", 4, "").unwrap();
//! assert_eq!(todo.id, "1");
//! assert_eq!(todo.group, "work");
//!
//! let moved = state.delete_group("work").unwrap();
//! assert_eq!(moved, 1);
//! assert_eq!(state.query(TodoFilter::default()).len(), 1);
//! ```

pub mod engine;
pub mod id;
pub mod models;
pub mod query;

pub use engine::{TodoChanges, TodoUpdate};
pub use models::{
    display_group, is_default_group, same_group, AppState, Group, Todo, Urgency, DEFAULT_GROUP,
};
pub use query::{group_by_name, GroupStats, GroupSummary, TodoFilter};
