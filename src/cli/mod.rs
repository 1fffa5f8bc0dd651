//! Command-line interface for todo-cli.
//!
//! This module only parses arguments and renders results; every rule about
//! todos and groups lives in [`crate::todos`].

mod render;
mod run;


pub use run::{execute, run, run_in, CliOutput};

use clap::{ArgGroup, Args, Parser, Subcommand};

/// A simple todo CLI with urgency levels and groups.
///
/// Todos live in groups. New todos go into the active group, and `list`
/// shows the active group unless told otherwise. The `default` group always
/// exists.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new todo.
    ///
    /// The todo goes into the active group unless --group is given.
    #[command(allow_negative_numbers = true)]
    Add {
        /// Task description (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,

        /// Urgency: 1=minimal, 2=low, 3=medium, 4=high, 5=critical
        #[arg(short, long, default_value_t = 1)]
        urgency: i64,

        /// Assign to this group instead of the active one
        #[arg(short, long, default_value = "")]
        group: String,
    },

    /// Mark a todo as completed.
    Complete {
        /// Todo ID
        id: String,
    },

    /// Mark a todo as incomplete.
    Incomplete {
        /// Todo ID
        id: String,
    },

    /// Update a todo.
    ///
    /// Only specified fields are updated; others remain unchanged.
    #[command(allow_negative_numbers = true)]
    Update {
        /// Todo ID
        id: String,

        /// New task description
        #[arg(short, long)]
        task: Option<String>,

        /// New urgency (1-5)
        #[arg(short, long)]
        urgency: Option<i64>,

        /// Move to this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Delete a todo.
    Delete {
        /// Todo ID
        id: String,
    },

    /// List todos.
    ///
    /// Without flags, shows incomplete todos from the active group, most
    /// urgent first.
    List {
        /// Include completed todos
        #[arg(short, long)]
        all: bool,

        /// Show todos from every group
        #[arg(long)]
        all_groups: bool,

        /// Print the matching todos as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage todo groups.
    ///
    /// Without flags, shows the active group and the available groups.
    Group(GroupArgs),
}

impl Command {
    /// Short name used in the event log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Complete { .. } => "complete",
            Self::Incomplete { .. } => "incomplete",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::List { .. } => "list",
            Self::Group(_) => "group",
        }
    }
}

/// Flags for the `group` command. At most one may be given.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct GroupArgs {
    /// List all available groups
    #[arg(short, long, group = "action")]
    pub list: bool,

    /// Show the active group
    #[arg(short, long, group = "action")]
    pub active: bool,

    /// Switch to a different group
    #[arg(short, long, group = "action", value_name = "NAME")]
    pub switch: Option<String>,

    /// Create a new group
    #[arg(short, long, group = "action", value_name = "NAME")]
    pub create: Option<String>,

    /// Delete a group (its todos move to default)
    #[arg(short, long, group = "action", value_name = "NAME")]
    pub delete: Option<String>,
}

/// What a `group` invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupAction {
    /// Show the active group and the group names.
    Show,
    /// List groups with counts.
    List,
    /// Show the active group with counts.
    Active,
    /// Switch the active group.
    Switch(String),
    /// Create a group.
    Create(String),
    /// Delete a group.
    Delete(String),
}

impl GroupArgs {
    /// The requested action.
    #[must_use]
    pub fn action(&self) -> GroupAction {
        if self.list {
            GroupAction::List
        } else if self.active {
            GroupAction::Active
        } else if let Some(name) = &self.switch {
            GroupAction::Switch(name.clone())
        } else if let Some(name) = &self.create {
            GroupAction::Create(name.clone())
        } else if let Some(name) = &self.delete {
            GroupAction::Delete(name.clone())
        } else {
            GroupAction::Show
        }
    }
}
