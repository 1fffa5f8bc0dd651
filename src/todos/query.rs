//! Read-only projections used for display.

use crate::todos::models::{display_group, same_group, AppState, Group, Todo};
use serde::Serialize;
use std::cmp::Reverse;

/// Filter options for listing todos.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TodoFilter {
    /// Include completed todos.
    pub include_completed: bool,
    /// Include todos from every group, not just the active one.
    pub all_groups: bool,
}

/// A group together with its todo count and whether it is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary<'a> {
    /// The group.
    #[serde(flatten)]
    pub group: &'a Group,
    /// Number of todos in the group.
    pub todo_count: usize,
    /// Whether this is the active group.
    pub is_active: bool,
}

/// Todo counts for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    /// All todos in the group.
    pub total: usize,
    /// Todos not yet completed.
    pub incomplete: usize,
}

impl AppState {
    /// Select todos matching `filter`, ordered for display.
    ///
    /// Incomplete todos come before completed ones; within each, higher
    /// urgency first. The sort is stable, so ties keep insertion order.
    #[must_use]
    pub fn query(&self, filter: TodoFilter) -> Vec<&Todo> {
        let mut todos: Vec<&Todo> = self
            .todos
            .iter()
            .filter(|t| filter.include_completed || !t.completed)
            .filter(|t| filter.all_groups || same_group(&t.group, &self.active_group))
            .collect();
        todos.sort_by_key(|t| (t.completed, Reverse(t.urgency)));
        todos
    }

    /// Every explicit group in creation order, with counts.
    #[must_use]
    pub fn list_groups(&self) -> Vec<GroupSummary<'_>> {
        self.groups
            .iter()
            .map(|group| GroupSummary {
                group,
                todo_count: self.todos.iter().filter(|t| t.group == group.name).count(),
                is_active: group.name == self.active_group,
            })
            .collect()
    }

    /// Total and incomplete todo counts for a group.
    #[must_use]
    pub fn group_stats(&self, name: &str) -> GroupStats {
        self.todos.iter().filter(|t| same_group(&t.group, name)).fold(
            GroupStats::default(),
            |mut stats, todo| {
                stats.total += 1;
                if !todo.completed {
                    stats.incomplete += 1;
                }
                stats
            },
        )
    }
}

/// Bucket todos by display group name, in order of first appearance.
///
/// The relative order of todos inside each bucket is preserved, so passing
/// the output of [`AppState::query`] keeps each bucket sorted.
#[must_use]
pub fn group_by_name<'a>(todos: &[&'a Todo]) -> Vec<(String, Vec<&'a Todo>)> {
    let mut buckets: Vec<(String, Vec<&'a Todo>)> = Vec::new();
    for &todo in todos {
        let name = display_group(&todo.group);
        match buckets.iter_mut().find(|(bucket, _)| bucket == name) {
            Some((_, members)) => members.push(todo),
            None => buckets.push((name.to_string(), vec![todo])),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::models::Urgency;
    use proptest::prelude::*;

    fn todo(id: &str, group: &str, urgency: u8, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            group: group.to_string(),
            urgency: Urgency::new(i64::from(urgency)).unwrap(),
            task: format!("task {id}"),
            completed,
        }
    }

    fn group(name: &str) -> Group {
        Group { id: format!("id-{name}"), name: name.to_string() }
    }

    fn ids(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_query_incomplete_before_completed() {
        let state = AppState {
            todos: vec![
                todo("1", "", 2, false),
                todo("2", "", 5, true),
                todo("3", "", 4, false),
            ],
            ..Default::default()
        };

        let result = state.query(TodoFilter { include_completed: true, all_groups: false });
        assert_eq!(ids(&result), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_query_hides_completed_by_default() {
        let state = AppState {
            todos: vec![todo("1", "", 2, false), todo("2", "", 5, true)],
            ..Default::default()
        };

        let result = state.query(TodoFilter::default());
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_query_active_default_group() {
        let state = AppState {
            groups: vec![group("work")],
            active_group: "default".to_string(),
            todos: vec![
                todo("1", "", 1, false),
                todo("2", "default", 3, false),
                todo("3", "work", 5, false),
                todo("4", "default", 5, true),
            ],
        };

        let result = state.query(TodoFilter::default());
        assert_eq!(ids(&result), vec!["2", "1"]);
        assert!(result.iter().all(|t| !t.completed && display_group(&t.group) == "default"));
    }

    #[test]
    fn test_query_active_named_group() {
        let state = AppState {
            groups: vec![group("work")],
            active_group: "work".to_string(),
            todos: vec![todo("1", "", 1, false), todo("2", "work", 3, false)],
        };

        assert_eq!(ids(&state.query(TodoFilter::default())), vec!["2"]);
    }

    #[test]
    fn test_query_all_groups() {
        let state = AppState {
            groups: vec![group("work")],
            active_group: "work".to_string(),
            todos: vec![todo("1", "", 1, false), todo("2", "work", 3, false)],
        };

        let result = state.query(TodoFilter { include_completed: false, all_groups: true });
        assert_eq!(ids(&result), vec!["2", "1"]);
    }

    #[test]
    fn test_query_ties_keep_insertion_order() {
        let state = AppState {
            todos: vec![
                todo("1", "", 3, false),
                todo("2", "", 3, false),
                todo("3", "", 3, true),
                todo("4", "", 3, false),
            ],
            ..Default::default()
        };

        let result = state.query(TodoFilter { include_completed: true, all_groups: true });
        assert_eq!(ids(&result), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_query_empty_is_not_an_error() {
        let state = AppState::default();
        assert!(state.query(TodoFilter::default()).is_empty());
    }

    #[test]
    fn test_list_groups() {
        let state = AppState {
            groups: vec![group("work"), group("home")],
            active_group: "home".to_string(),
            todos: vec![
                todo("1", "work", 1, false),
                todo("2", "work", 1, true),
                todo("3", "", 1, false),
            ],
        };

        let groups = state.list_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group.name, "work");
        assert_eq!(groups[0].todo_count, 2);
        assert!(!groups[0].is_active);
        assert_eq!(groups[1].group.name, "home");
        assert_eq!(groups[1].todo_count, 0);
        assert!(groups[1].is_active);
    }

    #[test]
    fn test_list_groups_serializes_flat() {
        let state = AppState { groups: vec![group("work")], ..Default::default() };
        let json = serde_json::to_value(state.list_groups()).unwrap();
        assert_eq!(json[0]["name"], "work");
        assert_eq!(json[0]["id"], "id-work");
        assert_eq!(json[0]["todo_count"], 0);
        assert_eq!(json[0]["is_active"], false);
    }

    #[test]
    fn test_group_stats() {
        let state = AppState {
            todos: vec![
                todo("1", "", 1, false),
                todo("2", "default", 1, true),
                todo("3", "work", 1, false),
            ],
            ..Default::default()
        };

        assert_eq!(state.group_stats("default"), GroupStats { total: 2, incomplete: 1 });
        assert_eq!(state.group_stats(""), GroupStats { total: 2, incomplete: 1 });
        assert_eq!(state.group_stats("work"), GroupStats { total: 1, incomplete: 1 });
        assert_eq!(state.group_stats("home"), GroupStats::default());
    }

    #[test]
    fn test_group_by_name_first_appearance() {
        let todos = [
            todo("1", "work", 5, false),
            todo("2", "", 4, false),
            todo("3", "work", 2, false),
            todo("4", "default", 1, false),
        ];
        let refs: Vec<&Todo> = todos.iter().collect();

        let buckets = group_by_name(&refs);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].0, "work");
        assert_eq!(ids(&buckets[0].1), vec!["1", "3"]);
        assert_eq!(buckets[1].0, "default");
        assert_eq!(ids(&buckets[1].1), vec!["2", "4"]);
    }

    fn arb_todos() -> impl Strategy<Value = Vec<(u8, bool)>> {
        proptest::collection::vec((1u8..=5, any::<bool>()), 0..30)
    }

    proptest! {
        #[test]
        fn prop_query_ordering(specs in arb_todos()) {
            let state = AppState {
                todos: specs
                    .iter()
                    .enumerate()
                    .map(|(i, (urgency, completed))| todo(&i.to_string(), "", *urgency, *completed))
                    .collect(),
                ..Default::default()
            };

            let result = state.query(TodoFilter { include_completed: true, all_groups: true });
            prop_assert_eq!(result.len(), specs.len());

            for pair in result.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.completed <= b.completed);
                if a.completed == b.completed {
                    prop_assert!(a.urgency >= b.urgency);
                    if a.urgency == b.urgency {
                        let (ia, ib): (usize, usize) = (a.id.parse().unwrap(), b.id.parse().unwrap());
                        prop_assert!(ia < ib);
                    }
                }
            }
        }
    }
}
