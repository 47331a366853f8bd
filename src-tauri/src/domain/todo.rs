//! Todo Entity
//!
//! A single task record: display name, completion flag, owning calendar
//! date. The date is assigned once at creation and never rewritten.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A todo item belonging to a particular calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the database
    pub id: u32,
    /// Display text
    pub name: String,
    /// Completion status
    pub done: bool,
    /// Calendar day the todo belongs to, assigned at creation
    pub due_date: NaiveDate,
}

impl Todo {
    /// A not-yet-inserted todo for `due_date`; the database assigns the id
    pub fn new(name: String, due_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name,
            done: false,
            due_date,
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_open() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let todo = Todo::new("Water the plants".to_string(), date);

        assert_eq!(todo.id(), 0);
        assert!(!todo.done);
        assert_eq!(todo.due_date, date);
    }

    #[test]
    fn test_date_serializes_as_iso_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let todo = Todo::new("Water the plants".to_string(), date);

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["due_date"], "2024-03-01");
    }
}
