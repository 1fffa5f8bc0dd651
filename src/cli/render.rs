//! Plain-text rendering of command results.

use crate::todos::{
    display_group, group_by_name, AppState, GroupStats, Todo, TodoChanges, TodoFilter, Urgency,
};

/// Width of the rule under a listing header.
const HEADER_RULE_WIDTH: usize = 40;

/// Width of the rule under a group heading.
const GROUP_RULE_WIDTH: usize = 20;

/// Label for an urgency level.
pub const fn urgency_label(urgency: Urgency) -> &'static str {
    match urgency.get() {
        5 => "CRITICAL",
        4 => "HIGH",
        3 => "MEDIUM",
        2 => "LOW",
        _ => "MINIMAL",
    }
}

/// One listing line: `[ ] [3] HIGH Buy milk`.
pub fn todo_line(todo: &Todo) -> String {
    let status = if todo.completed { "[x]" } else { "[ ]" };
    format!("{status} [{}] {} {}", todo.id, urgency_label(todo.urgency), todo.task)
}

pub fn added(todo: &Todo) -> Vec<String> {
    vec![
        format!("Added todo [{}]: {}", todo.id, todo.task),
        format!(
            "  Urgency: {} | Group: {}",
            urgency_label(todo.urgency),
            display_group(&todo.group)
        ),
    ]
}

pub fn completion(todo: &Todo) -> Vec<String> {
    if todo.completed {
        vec![format!("Completed todo [{}]: {}", todo.id, todo.task)]
    } else {
        vec![format!("Marked todo [{}] as incomplete: {}", todo.id, todo.task)]
    }
}

pub fn updated(changes: &TodoChanges) -> Vec<String> {
    let mut lines = vec![format!("Updated todo [{}]", changes.id)];

    let mut parts = Vec::new();
    if let Some(task) = &changes.task {
        parts.push(format!("task: {task}"));
    }
    if let Some(urgency) = changes.urgency {
        parts.push(format!("urgency: {}", urgency_label(urgency)));
    }
    if let Some(group) = &changes.group {
        parts.push(format!("group: {group}"));
    }
    if !parts.is_empty() {
        lines.push(format!("  Changes: {}", parts.join(", ")));
    }
    lines
}

pub fn deleted(todo: &Todo) -> Vec<String> {
    vec![format!("Deleted todo [{}]: {}", todo.id, todo.task)]
}

/// Render a listing, or the message explaining why it is empty.
pub fn todo_list(state: &AppState, filter: TodoFilter, todos: &[&Todo]) -> Vec<String> {
    if state.todos.is_empty() {
        return vec!["No todos found".to_string()];
    }

    let scope = if filter.all_groups {
        "from all groups".to_string()
    } else {
        format!("from group '{}'", state.active_group_name())
    };

    if todos.is_empty() {
        let status = if filter.include_completed { "todos" } else { "incomplete todos" };
        let place = if filter.all_groups {
            "in any group".to_string()
        } else {
            format!("in group '{}'", state.active_group_name())
        };
        return vec![format!("No {status} found {place}")];
    }

    let status = if filter.include_completed { "All todos" } else { "Incomplete todos" };
    let mut lines = vec![format!("{status} {scope}:"), "=".repeat(HEADER_RULE_WIDTH)];

    if filter.all_groups {
        for (i, (name, members)) in group_by_name(todos).into_iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("Group: {name}"));
            lines.push("-".repeat(GROUP_RULE_WIDTH));
            lines.extend(members.into_iter().map(todo_line));
        }
    } else {
        lines.extend(todos.iter().copied().map(todo_line));
    }
    lines
}

/// The bare `group` command: active group plus the group names.
pub fn group_overview(state: &AppState) -> Vec<String> {
    let mut lines = vec![format!("Current active group: {}", state.active_group_name())];
    if !state.groups.is_empty() {
        lines.push(String::new());
        lines.push("Available groups:".to_string());
        for group in &state.groups {
            if group.name == state.active_group {
                lines.push(format!("  {} (active)", group.name));
            } else {
                lines.push(format!("  {}", group.name));
            }
        }
    }
    lines
}

pub fn group_list(state: &AppState) -> Vec<String> {
    let summaries = state.list_groups();
    if summaries.is_empty() {
        return vec!["No groups found. The default group is always available.".to_string()];
    }

    let mut lines = vec![format!("Available groups ({} total):", summaries.len())];
    for summary in summaries {
        let mut line = format!("  {} ({} todos)", summary.group.name, summary.todo_count);
        if summary.is_active {
            line.push_str(" - ACTIVE");
        }
        lines.push(line);
    }
    lines
}

pub fn active_group(name: &str, stats: GroupStats) -> Vec<String> {
    vec![
        format!("Active group: {name}"),
        format!("Total todos: {} ({} incomplete)", stats.total, stats.incomplete),
    ]
}

pub fn switched(name: &str, stats: GroupStats) -> Vec<String> {
    vec![
        format!("Switched to group '{name}'"),
        format!("This group has {} todos ({} incomplete)", stats.total, stats.incomplete),
    ]
}

pub fn created(name: &str, activated: bool) -> Vec<String> {
    let hint = if activated {
        format!("Switched to group '{name}'")
    } else {
        format!("Use 'todo group --switch {name}' to make it active")
    };
    vec![format!("Created group '{name}'"), hint]
}

pub fn group_deleted(name: &str, reassigned: usize, was_active: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if was_active {
        lines.push("Switched active group to 'default'".to_string());
    }
    lines.push(format!("Deleted group '{name}'"));
    if reassigned > 0 {
        lines.push(format!("Moved {reassigned} todos to 'default' group"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, group: &str, urgency: i64, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            group: group.to_string(),
            urgency: Urgency::new(urgency).unwrap(),
            task: format!("task {id}"),
            completed,
        }
    }

    #[test]
    fn test_urgency_labels() {
        let labels: Vec<&str> =
            (1..=5).map(|u| urgency_label(Urgency::new(u).unwrap())).collect();
        assert_eq!(labels, vec!["MINIMAL", "LOW", "MEDIUM", "HIGH", "CRITICAL"]);
    }

    #[test]
    fn test_todo_line() {
        assert_eq!(todo_line(&todo("3", "", 4, false)), "[ ] [3] HIGH task 3");
        assert_eq!(todo_line(&todo("4", "", 1, true)), "[x] [4] MINIMAL task 4");
    }

    #[test]
    fn test_updated_lists_only_supplied_fields() {
        let changes = TodoChanges {
            id: "2".to_string(),
            task: None,
            urgency: Some(Urgency::MAX),
            group: Some("home".to_string()),
        };
        assert_eq!(updated(&changes), vec!["Updated todo [2]", "  Changes: urgency: CRITICAL, group: home"]);

        let nothing = TodoChanges { id: "2".to_string(), task: None, urgency: None, group: None };
        assert_eq!(updated(&nothing), vec!["Updated todo [2]"]);
    }

    #[test]
    fn test_todo_list_no_todos_at_all() {
        let state = AppState::default();
        assert_eq!(todo_list(&state, TodoFilter::default(), &[]), vec!["No todos found"]);
    }

    #[test]
    fn test_todo_list_no_matches() {
        let state = AppState { todos: vec![todo("1", "", 2, true)], ..Default::default() };
        assert_eq!(
            todo_list(&state, TodoFilter::default(), &[]),
            vec!["No incomplete todos found in group 'default'"]
        );
        let all = TodoFilter { include_completed: true, all_groups: true };
        assert_eq!(todo_list(&state, all, &[]), vec!["No todos found in any group"]);
    }

    #[test]
    fn test_todo_list_all_groups_sections() {
        let state = AppState {
            todos: vec![todo("1", "work", 5, false), todo("2", "", 3, false)],
            ..Default::default()
        };
        let filter = TodoFilter { include_completed: false, all_groups: true };
        let todos = state.query(filter);

        let lines = todo_list(&state, filter, &todos);
        assert_eq!(lines[0], "Incomplete todos from all groups:");
        assert_eq!(lines[2], "Group: work");
        assert_eq!(lines[4], "[ ] [1] CRITICAL task 1");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Group: default");
        assert_eq!(lines[8], "[ ] [2] MEDIUM task 2");
    }

    #[test]
    fn test_group_deleted_messages() {
        assert_eq!(
            group_deleted("work", 3, true),
            vec![
                "Switched active group to 'default'",
                "Deleted group 'work'",
                "Moved 3 todos to 'default' group"
            ]
        );
        assert_eq!(group_deleted("work", 0, false), vec!["Deleted group 'work'"]);
    }
}
