//! Error types for `todo_cli`.

use std::path::PathBuf;

/// Errors that can occur while loading, mutating, or saving todo state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Urgency outside the 1-5 range.
    #[error("urgency must be between 1 and 5 (got {0})")]
    InvalidUrgency(i64),

    /// An empty or whitespace-only group name was supplied.
    #[error("group name cannot be empty")]
    InvalidName,

    /// Attempt to create or delete the implicit default group.
    #[error("'{0}' is a reserved group name")]
    ReservedName(String),

    /// A group with this name already exists.
    #[error("group '{0}' already exists")]
    GroupExists(String),

    /// The referenced group does not exist.
    #[error("group '{0}' does not exist")]
    GroupNotFound(String),

    /// No todo has the referenced ID.
    #[error("todo with ID '{0}' not found")]
    TodoNotFound(String),

    /// A todo task description was empty.
    #[error("task description cannot be empty")]
    EmptyTask,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The home directory could not be determined.
    #[error("could not determine the home directory")]
    HomeDirNotFound,

    /// The persisted document could not be read as todo state.
    #[error("corrupt state file {path}: {reason}")]
    CorruptState {
        /// The state file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
}

/// Closed set of failure categories, for callers that branch on the kind of
/// failure rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Urgency outside 1-5.
    InvalidUrgency,
    /// Empty group name.
    InvalidName,
    /// The `default` group was named where it is not allowed.
    ReservedName,
    /// Duplicate group name.
    GroupExists,
    /// Unknown group name.
    GroupNotFound,
    /// Unknown todo ID.
    TodoNotFound,
    /// Empty task description.
    InvalidTask,
    /// Loading or saving state failed.
    StorageFailure,
}

impl Error {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrgency(_) => ErrorKind::InvalidUrgency,
            Self::InvalidName => ErrorKind::InvalidName,
            Self::ReservedName(_) => ErrorKind::ReservedName,
            Self::GroupExists(_) => ErrorKind::GroupExists,
            Self::GroupNotFound(_) => ErrorKind::GroupNotFound,
            Self::TodoNotFound(_) => ErrorKind::TodoNotFound,
            Self::EmptyTask => ErrorKind::InvalidTask,
            Self::Io(_)
            | Self::Json(_)
            | Self::Yaml(_)
            | Self::HomeDirNotFound
            | Self::CorruptState { .. } => ErrorKind::StorageFailure,
        }
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
