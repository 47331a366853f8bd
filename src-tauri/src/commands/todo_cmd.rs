//! Tauri Commands for Todo CRUD
//!
//! Exposes todo operations to the frontend via Tauri IPC. Failures are
//! logged here and returned as strings; the frontend decides how little to
//! do with them.

use chrono::{Duration, Local};
use tauri::State;
use tracing::error;

use crate::domain::{DomainError, Todo};
use crate::repository::{DatedRepository, Repository};
use crate::AppState;

/// Days of history the rollup view covers, today inclusive
const HISTORY_WINDOW_DAYS: i64 = 7;

/// Create a new todo for today; id and date are assigned here, not by the
/// caller
#[tauri::command]
pub async fn create_todo(state: State<'_, AppState>, name: String) -> Result<Todo, String> {
    let todo = Todo::new(name, Local::now().date_naive());
    state
        .todo_repo
        .create(&todo)
        .await
        .map_err(log_err("create_todo"))
}

/// List today's todos in creation order
#[tauri::command]
pub async fn list_today_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    let today = Local::now().date_naive();
    state
        .todo_repo
        .list_for_date(today)
        .await
        .map_err(log_err("list_today_todos"))
}

/// List todos from the last week, newest day first
#[tauri::command]
pub async fn list_recent_todos(state: State<'_, AppState>) -> Result<Vec<Todo>, String> {
    let cutoff = Local::now().date_naive() - Duration::days(HISTORY_WINDOW_DAYS - 1);
    state
        .todo_repo
        .list_since(cutoff)
        .await
        .map_err(log_err("list_recent_todos"))
}

/// Update a todo's name and completion flag; its date never changes
#[tauri::command]
pub async fn update_todo(
    state: State<'_, AppState>,
    id: u32,
    name: String,
    done: bool,
) -> Result<Todo, String> {
    let existing = state
        .todo_repo
        .find_by_id(id)
        .await
        .map_err(log_err("update_todo"))?
        .ok_or_else(|| format!("todo {} not found", id))?;

    let candidate = Todo {
        id,
        name,
        done,
        due_date: existing.due_date,
    };
    state
        .todo_repo
        .update(&candidate)
        .await
        .map_err(log_err("update_todo"))
}

/// Delete a todo, reporting whether it existed
#[tauri::command]
pub async fn delete_todo(state: State<'_, AppState>, id: u32) -> Result<bool, String> {
    state
        .todo_repo
        .delete(id)
        .await
        .map_err(log_err("delete_todo"))
}

fn log_err(op: &'static str) -> impl Fn(DomainError) -> String {
    move |e| {
        error!("{op} failed: {e}");
        e.to_string()
    }
}
