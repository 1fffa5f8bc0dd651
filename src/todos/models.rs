//! Todo model types: todos, groups, and the persisted application state.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};

/// Name of the implicit group that always exists and is never stored.
pub const DEFAULT_GROUP: &str = "default";

/// Whether a group name refers to the default group.
///
/// The empty string is accepted as a synonym for `"default"`.
#[must_use]
pub fn is_default_group(name: &str) -> bool {
    name.is_empty() || name == DEFAULT_GROUP
}

/// Compare two group names, treating `""` and `"default"` as equal.
#[must_use]
pub fn same_group(a: &str, b: &str) -> bool {
    if is_default_group(a) {
        is_default_group(b)
    } else {
        a == b
    }
}

/// Display name for a group reference (`""` is shown as `"default"`).
#[must_use]
pub fn display_group(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_GROUP
    } else {
        name
    }
}

/// Todo urgency (1 = minimal, 5 = critical).
///
/// Serialized as a bare integer. Deserializing an out-of-range value fails, so
/// every loaded todo carries a valid urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Urgency(u8);

impl Urgency {
    /// Lowest urgency.
    pub const MIN: Self = Self(1);
    /// Highest urgency.
    pub const MAX: Self = Self(5);

    /// Create an urgency from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrgency`] if `value` is outside 1-5.
    pub fn new(value: i64) -> Result<Self, Error> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN.0..=Self::MAX.0).contains(&v) => Ok(Self(v)),
            _ => Err(Error::InvalidUrgency(value)),
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Urgency {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> Self {
        urgency.0
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Name of the owning group. Empty means the default group.
    #[serde(default)]
    pub group: String,
    /// How urgent the todo is.
    pub urgency: Urgency,
    /// Free-text description.
    pub task: String,
    /// Whether the todo is done.
    #[serde(default)]
    pub completed: bool,
}

/// A named group of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Opaque random identifier. Older documents may leave this empty.
    #[serde(default)]
    pub id: String,
    /// User-facing unique name.
    pub name: String,
}

/// The whole persisted application state.
///
/// Field order matches the on-disk document: `groups`, `active_group`, `todos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Explicit groups in creation order. The default group is never listed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub groups: Vec<Group>,
    /// Currently selected group. Empty means the default group.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub active_group: String,
    /// Todos in creation order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub todos: Vec<Todo>,
}

/// Older writers emitted `null` for empty arrays.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AppState {
    /// Name of the active group, with the empty string shown as `"default"`.
    #[must_use]
    pub fn active_group_name(&self) -> &str {
        display_group(&self.active_group)
    }

    /// Whether an explicit group with exactly this name exists.
    #[must_use]
    pub fn group_exists(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    /// Whether `name` refers to the default group or an existing group.
    #[must_use]
    pub fn group_resolves(&self, name: &str) -> bool {
        is_default_group(name) || self.group_exists(name)
    }

    /// Find a todo by ID.
    #[must_use]
    pub fn find_todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Whether the active group is the default group.
    #[must_use]
    pub fn is_default_active(&self) -> bool {
        is_default_group(&self.active_group)
    }
}
