//! Date Grouping
//!
//! Partitions a multi-day todo collection into per-date buckets for the
//! history view.

use std::collections::HashMap;

use crate::models::Todo;

/// One day's worth of todos in the history rollup
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: String,
    pub todos: Vec<Todo>,
}

/// Group todos by owning date, keeping dates in first-seen order and todos
/// in their original relative order within each date. This is a stable
/// partition, not a sort: an input that is not date-ordered yields groups
/// that are not date-ordered either.
pub fn group_by_date(todos: &[Todo]) -> Vec<DayGroup> {
    let mut buckets: HashMap<String, Vec<Todo>> = HashMap::new();
    let mut seen_order: Vec<String> = Vec::new();

    for todo in todos {
        if !buckets.contains_key(&todo.due_date) {
            seen_order.push(todo.due_date.clone());
        }
        buckets
            .entry(todo.due_date.clone())
            .or_default()
            .push(todo.clone());
    }

    seen_order
        .into_iter()
        .map(|date| {
            let todos = buckets.remove(&date).unwrap_or_default();
            DayGroup { date, todos }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, date: &str) -> Todo {
        Todo {
            id,
            name: format!("Todo {}", id),
            done: false,
            due_date: date.to_string(),
        }
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn test_groups_follow_first_seen_date_order() {
        let todos = vec![
            make_todo(0, "2024-03-02"),
            make_todo(1, "2024-03-01"),
            make_todo(2, "2024-03-02"),
        ];

        let groups = group_by_date(&todos);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-03-02");
        assert_eq!(groups[1].date, "2024-03-01");

        let first: Vec<u32> = groups[0].todos.iter().map(|t| t.id).collect();
        assert_eq!(first, vec![0, 2]);
        let second: Vec<u32> = groups[1].todos.iter().map(|t| t.id).collect();
        assert_eq!(second, vec![1]);
    }

    #[test]
    fn test_grouping_is_a_permutation_preserving_relative_order() {
        let todos = vec![
            make_todo(1, "2024-03-03"),
            make_todo(2, "2024-03-01"),
            make_todo(3, "2024-03-03"),
            make_todo(4, "2024-03-02"),
            make_todo(5, "2024-03-01"),
        ];

        let groups = group_by_date(&todos);
        let flattened: Vec<u32> = groups
            .iter()
            .flat_map(|g| g.todos.iter().map(|t| t.id))
            .collect();

        // Every todo appears exactly once
        let mut sorted = flattened.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);

        // Within each date, original relative order survives
        assert_eq!(flattened, vec![1, 3, 2, 5, 4]);
    }

    #[test]
    fn test_single_date_collapses_to_one_group() {
        let todos = vec![make_todo(1, "2024-03-01"), make_todo(2, "2024-03-01")];

        let groups = group_by_date(&todos);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].todos.len(), 2);
    }
}
