//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output.

use crate::cli::render;
use crate::cli::{Command, GroupAction};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::event_log;
use crate::paths;
use crate::storage::JsonFileStore;
use crate::todos::{TodoFilter, TodoUpdate};
use crate::traits::StateStore;
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a command against the default data directory.
pub fn run(command: Command) -> CliOutput {
    match paths::data_dir() {
        Some(dir) => run_in(command, &dir),
        None => error_output(&Error::HomeDirNotFound),
    }
}

/// Run a command against the state and settings in `data_dir`.
pub fn run_in(command: Command, data_dir: &Path) -> CliOutput {
    let settings = Settings::load_or_default(data_dir).unwrap_or_else(|e| {
        tracing::warn!("could not load settings, using defaults: {e}");
        Settings::default()
    });
    let store = JsonFileStore::in_dir(data_dir);
    let name = command.name();

    let result = execute(command, &store, &settings);

    let detail = match &result {
        Ok(lines) => serde_json::json!({ "output": lines }),
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };
    event_log::record(&settings, data_dir, name, result.is_ok(), &detail);

    match result {
        Ok(lines) => success_output(lines),
        Err(e) => error_output(&e),
    }
}

/// Execute a command against any store and return the lines to print.
///
/// Mutating commands save only when the whole operation succeeds.
///
/// # Errors
///
/// Returns the validation or storage error that stopped the command.
pub fn execute<S: StateStore>(command: Command, store: &S, settings: &Settings) -> Result<Vec<String>> {
    match command {
        Command::Add { task, urgency, group } => {
            let task = task.join(" ");
            let todo = store.transact(|state| state.add_todo(&task, urgency, &group))?;
            Ok(render::added(&todo))
        }
        Command::Complete { id } => {
            let todo = store.transact(|state| state.set_completion(&id, true))?;
            Ok(render::completion(&todo))
        }
        Command::Incomplete { id } => {
            let todo = store.transact(|state| state.set_completion(&id, false))?;
            Ok(render::completion(&todo))
        }
        Command::Update { id, task, urgency, group } => {
            let update = TodoUpdate { task, urgency, group };
            let changes = store.transact(|state| state.update_todo(&id, update))?;
            Ok(render::updated(&changes))
        }
        Command::Delete { id } => {
            let todo = store.transact(|state| state.delete_todo(&id))?;
            Ok(render::deleted(&todo))
        }
        Command::List { all, all_groups, json } => {
            let state = store.load()?;
            let filter = TodoFilter { include_completed: all, all_groups };
            let todos = state.query(filter);
            if json {
                Ok(vec![serde_json::to_string_pretty(&todos)?])
            } else {
                Ok(render::todo_list(&state, filter, &todos))
            }
        }
        Command::Group(args) => run_group(args.action(), store, settings),
    }
}

fn run_group<S: StateStore>(action: GroupAction, store: &S, settings: &Settings) -> Result<Vec<String>> {
    match action {
        GroupAction::Show => Ok(render::group_overview(&store.load()?)),
        GroupAction::List => Ok(render::group_list(&store.load()?)),
        GroupAction::Active => {
            let state = store.load()?;
            let name = state.active_group_name();
            Ok(render::active_group(name, state.group_stats(name)))
        }
        GroupAction::Switch(name) => {
            let (name, stats) = store.transact(|state| {
                state.switch_active_group(&name)?;
                let name = state.active_group_name().to_string();
                let stats = state.group_stats(&name);
                Ok((name, stats))
            })?;
            Ok(render::switched(&name, stats))
        }
        GroupAction::Create(name) => {
            let activate = settings.switch_on_create;
            let group = store.transact(|state| state.create_group(&name, activate))?;
            Ok(render::created(&group.name, activate))
        }
        GroupAction::Delete(name) => {
            let name = name.trim().to_string();
            let (reassigned, was_active) = store.transact(|state| {
                let was_active = state.active_group == name;
                let reassigned = state.delete_group(&name)?;
                Ok((reassigned, was_active))
            })?;
            Ok(render::group_deleted(&name, reassigned, was_active))
        }
    }
}

fn success_output(lines: Vec<String>) -> CliOutput {
    CliOutput { exit_code: ExitCode::SUCCESS, stdout: lines, stderr: vec![] }
}

fn error_output(error: &Error) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![format!("Error: {error}")] }
}
