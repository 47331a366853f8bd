//! Frontend Models
//!
//! Data structures matching backend entities, plus the derived views the
//! today panel renders.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub name: String,
    pub done: bool,
    pub due_date: String,
}

/// Outcome of a card action, bubbled up to the owning panel
#[derive(Debug, Clone, PartialEq)]
pub enum TodoEvent {
    Updated(Todo),
    Deleted(u32),
}

/// Todos still open, in the order the backend returned them
pub fn upcoming(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| !todo.done).cloned().collect()
}

/// Todos already finished, in the order the backend returned them
pub fn completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.done).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, done: bool) -> Todo {
        Todo {
            id,
            name: format!("Todo {}", id),
            done,
            due_date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_partition_covers_every_todo_once() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        let open = upcoming(&todos);
        let finished = completed(&todos);

        assert_eq!(open.len() + finished.len(), todos.len());
        for todo in &todos {
            let in_open = open.iter().any(|t| t.id == todo.id);
            let in_finished = finished.iter().any(|t| t.id == todo.id);
            assert!(in_open != in_finished);
        }
    }

    #[test]
    fn test_partition_preserves_backend_order() {
        let todos = vec![
            make_todo(3, false),
            make_todo(1, true),
            make_todo(2, false),
            make_todo(5, true),
        ];

        let open: Vec<u32> = upcoming(&todos).iter().map(|t| t.id).collect();
        let finished: Vec<u32> = completed(&todos).iter().map(|t| t.id).collect();

        assert_eq!(open, vec![3, 2]);
        assert_eq!(finished, vec![1, 5]);
    }

    #[test]
    fn test_partition_of_empty_list_is_empty() {
        assert!(upcoming(&[]).is_empty());
        assert!(completed(&[]).is_empty());
    }
}
