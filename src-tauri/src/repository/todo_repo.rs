//! Todo Repository Implementation
//!
//! SQLite-backed implementation of Repository<Todo> and
//! DatedRepository<Todo>.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::traits::{DatedRepository, Repository};
use crate::domain::{DomainError, DomainResult, Todo};

const TODO_COLUMNS: &str = "id, name, done, due_date";

/// SQLite implementation of the todo repository
#[derive(Clone)]
pub struct TodoRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TodoRepository {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        if entity.name.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "todo name must not be empty".to_string(),
            ));
        }

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO todos (name, done, due_date) VALUES (?1, ?2, ?3)",
            params![entity.name, entity.done, entity.due_date.to_string()],
        )
        .map_err(internal)?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid() as u32;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1"),
            params![id],
            row_to_todo,
        )
        .optional()
        .map_err(internal)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        query_todos(
            &conn,
            &format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id ASC"),
            params![],
        )
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;

        // Only name and done are client-mutable; a todo stays on the day
        // it was created.
        let changed = conn
            .execute(
                "UPDATE todos SET name = ?1, done = ?2 WHERE id = ?3",
                params![entity.name, entity.done, entity.id],
            )
            .map_err(internal)?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!(
                "todo {} not found",
                entity.id
            )));
        }

        conn.query_row(
            &format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?1"),
            params![entity.id],
            row_to_todo,
        )
        .map_err(internal)
    }

    async fn delete(&self, id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let changed = conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])
            .map_err(internal)?;
        Ok(changed > 0)
    }
}

#[async_trait]
impl DatedRepository<Todo> for TodoRepository {
    async fn list_for_date(&self, date: NaiveDate) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        query_todos(
            &conn,
            &format!("SELECT {TODO_COLUMNS} FROM todos WHERE due_date = ?1 ORDER BY id ASC"),
            params![date.to_string()],
        )
    }

    async fn list_since(&self, date: NaiveDate) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        query_todos(
            &conn,
            &format!(
                "SELECT {TODO_COLUMNS} FROM todos WHERE due_date >= ?1 \
                 ORDER BY due_date DESC, id ASC"
            ),
            params![date.to_string()],
        )
    }
}

fn query_todos(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> DomainResult<Vec<Todo>> {
    let mut stmt = conn.prepare(sql).map_err(internal)?;
    let rows = stmt.query_map(params, row_to_todo).map_err(internal)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let date_text: String = row.get(3)?;
    let due_date = date_text.parse::<NaiveDate>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
        done: row.get(2)?,
        due_date,
    })
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}
