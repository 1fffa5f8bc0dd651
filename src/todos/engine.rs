//! Todo and group operations on an in-memory [`AppState`].
//!
//! Every operation validates its inputs before changing anything, so a call
//! that returns an error leaves the state exactly as it found it.

use crate::error::{Error, Result};
use crate::todos::id::{generate_group_id, next_todo_id};
use crate::todos::models::{is_default_group, AppState, Group, Todo, Urgency, DEFAULT_GROUP};
use serde::Serialize;

/// Fields that can be updated on a todo.
#[derive(Debug, Default, Clone)]
pub struct TodoUpdate {
    /// New task description (if Some).
    pub task: Option<String>,
    /// New urgency (if Some).
    pub urgency: Option<i64>,
    /// New group (if Some and non-empty).
    pub group: Option<String>,
}

impl TodoUpdate {
    /// Check if any fields are set for update.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.urgency.is_none() && self.group.as_deref().map_or(true, str::is_empty)
    }
}

/// Which fields an update touched, with their new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoChanges {
    /// The updated todo's ID.
    pub id: String,
    /// New task, if it was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// New urgency, if it was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    /// New group, if it was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl TodoChanges {
    /// True when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.task.is_none() && self.urgency.is_none() && self.group.is_none()
    }
}

fn validate_task(task: &str) -> Result<()> {
    if task.trim().is_empty() {
        return Err(Error::EmptyTask);
    }
    Ok(())
}

/// Trim a group name supplied for a group command and reject blanks.
fn required_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidName);
    }
    Ok(name)
}

impl AppState {
    fn todo_index(&self, id: &str) -> Result<usize> {
        self.todos.iter().position(|t| t.id == id).ok_or_else(|| Error::TodoNotFound(id.to_string()))
    }

    /// Add a todo and return a copy of it.
    ///
    /// An empty `group` means the active group. Todos landing in the default
    /// group are stored with the group name `"default"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrgency`], [`Error::EmptyTask`], or
    /// [`Error::GroupNotFound`].
    pub fn add_todo(&mut self, task: &str, urgency: i64, group: &str) -> Result<Todo> {
        let urgency = Urgency::new(urgency)?;
        validate_task(task)?;

        let group = if group.is_empty() { self.active_group.as_str() } else { group };
        if !self.group_resolves(group) {
            return Err(Error::GroupNotFound(group.to_string()));
        }
        let group = if is_default_group(group) { DEFAULT_GROUP } else { group }.to_string();

        let todo = Todo {
            id: next_todo_id(&self.todos),
            group,
            urgency,
            task: task.to_string(),
            completed: false,
        };
        tracing::debug!(id = %todo.id, group = %todo.group, urgency = %todo.urgency, "added todo");
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Mark a todo complete or incomplete. Setting the current value again
    /// succeeds without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TodoNotFound`] if no todo has this ID.
    pub fn set_completion(&mut self, id: &str, completed: bool) -> Result<Todo> {
        let index = self.todo_index(id)?;
        let todo = &mut self.todos[index];
        todo.completed = completed;
        tracing::debug!(id, completed, "set completion");
        Ok(todo.clone())
    }

    /// Apply the supplied fields of `update` to a todo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TodoNotFound`], [`Error::InvalidUrgency`],
    /// [`Error::EmptyTask`], or [`Error::GroupNotFound`]. Nothing is changed
    /// when any check fails.
    pub fn update_todo(&mut self, id: &str, update: TodoUpdate) -> Result<TodoChanges> {
        let index = self.todo_index(id)?;

        let urgency = update.urgency.map(Urgency::new).transpose()?;
        if let Some(task) = &update.task {
            validate_task(task)?;
        }
        let group = update.group.filter(|g| !g.is_empty());
        if let Some(group) = &group {
            if !self.group_resolves(group) {
                return Err(Error::GroupNotFound(group.clone()));
            }
        }

        let todo = &mut self.todos[index];
        if let Some(task) = &update.task {
            todo.task.clone_from(task);
        }
        if let Some(urgency) = urgency {
            todo.urgency = urgency;
        }
        if let Some(group) = &group {
            todo.group.clone_from(group);
        }

        tracing::debug!(id, "updated todo");
        Ok(TodoChanges { id: id.to_string(), task: update.task, urgency, group })
    }

    /// Remove a todo and return it. The remaining todos keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TodoNotFound`] if no todo has this ID.
    pub fn delete_todo(&mut self, id: &str) -> Result<Todo> {
        let index = self.todo_index(id)?;
        let removed = self.todos.remove(index);
        tracing::debug!(id, "deleted todo");
        Ok(removed)
    }

    /// Create a group. When `activate` is true the new group also becomes the
    /// active group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`], [`Error::ReservedName`], or
    /// [`Error::GroupExists`].
    pub fn create_group(&mut self, name: &str, activate: bool) -> Result<Group> {
        let name = required_name(name)?;
        if name == DEFAULT_GROUP {
            return Err(Error::ReservedName(name.to_string()));
        }
        if self.group_exists(name) {
            return Err(Error::GroupExists(name.to_string()));
        }

        let group = Group { id: generate_group_id(), name: name.to_string() };
        self.groups.push(group.clone());
        if activate {
            self.active_group.clone_from(&group.name);
        }

        tracing::debug!(name, activate, "created group");
        Ok(group)
    }

    /// Delete a group, moving its todos to the default group.
    ///
    /// Reassignment, removal, and resetting the active group all happen on
    /// the same state. Returns how many todos were reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`], [`Error::ReservedName`], or
    /// [`Error::GroupNotFound`].
    pub fn delete_group(&mut self, name: &str) -> Result<usize> {
        let name = required_name(name)?;
        if name == DEFAULT_GROUP {
            return Err(Error::ReservedName(name.to_string()));
        }
        if !self.group_exists(name) {
            return Err(Error::GroupNotFound(name.to_string()));
        }

        let mut reassigned = 0;
        self.todos = std::mem::take(&mut self.todos)
            .into_iter()
            .map(|mut todo| {
                if todo.group == name {
                    todo.group = DEFAULT_GROUP.to_string();
                    reassigned += 1;
                }
                todo
            })
            .collect();

        self.groups = std::mem::take(&mut self.groups).into_iter().filter(|g| g.name != name).collect();

        if self.active_group == name {
            self.active_group = DEFAULT_GROUP.to_string();
        }

        tracing::debug!(name, reassigned, "deleted group");
        Ok(reassigned)
    }

    /// Make `name` the active group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] for a blank name or
    /// [`Error::GroupNotFound`] for an unknown one.
    pub fn switch_active_group(&mut self, name: &str) -> Result<()> {
        let name = required_name(name)?;
        if !self.group_resolves(name) {
            return Err(Error::GroupNotFound(name.to_string()));
        }
        self.active_group = name.to_string();
        tracing::debug!(name, "switched active group");
        Ok(())
    }
}
