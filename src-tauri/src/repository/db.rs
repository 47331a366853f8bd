//! Database Connection and Setup
//!
//! Opens the SQLite database and applies migrations.

use std::path::Path;

use rusqlite::Connection;

use crate::domain::{DomainError, DomainResult};

/// Open (or create) the database at `path` and bring the schema up to date
pub fn open_db(path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(path).map_err(internal)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// In-memory database for tests
#[cfg(test)]
pub fn open_in_memory() -> DomainResult<Connection> {
    let conn = Connection::open_in_memory().map_err(internal)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            done INTEGER NOT NULL DEFAULT 0,
            due_date TEXT NOT NULL
        )",
        (),
    )
    .map_err(internal)?;

    // Index for the per-day and windowed queries
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_todos_due_date ON todos(due_date)",
        (),
    )
    .map_err(internal)?;

    Ok(())
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}
