use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension, Row};
use todo_domain::TodoRecord;

use crate::error::ApiError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todo (
    id TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
)";

/// Process-wide handle to the todo table.
///
/// One connection behind a mutex, opened eagerly at startup and shared by
/// every handler. Each operation is a short statement, so the lock is held
/// only for the duration of a single query.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        Self::from_conn(Connection::open(path)?)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self, ApiError> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self, ApiError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns every row, in whatever order the store yields.
    pub fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, text, completed FROM todo")?;
        let rows = stmt.query_map([], row_to_todo)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Inserts a new row with `completed` forced to false. A duplicate id
    /// violates the primary key and comes back as a store error.
    pub fn insert_todo(&self, id: &str, text: &str) -> Result<TodoRecord, ApiError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO todo (id, text, completed) VALUES (?1, ?2, 0)",
            params![id, text],
        )?;
        Ok(TodoRecord {
            id: id.to_string(),
            text: text.to_string(),
            completed: false,
        })
    }

    /// Partial update: each `None` keeps the stored value. The merge happens
    /// here rather than in SQL so the coalescing rule is explicit. A patch
    /// with neither field writes the row back unchanged.
    pub fn update_todo(
        &self,
        id: &str,
        text: Option<&str>,
        completed: Option<bool>,
    ) -> Result<TodoRecord, ApiError> {
        let conn = self.conn.lock().unwrap();
        let current = get_todo(&conn, id)?.ok_or(ApiError::NotFound)?;
        let text = text.map_or(current.text, str::to_string);
        let completed = completed.unwrap_or(current.completed);
        conn.execute(
            "UPDATE todo SET text = ?1, completed = ?2 WHERE id = ?3",
            params![text, completed, id],
        )?;
        Ok(TodoRecord {
            id: id.to_string(),
            text,
            completed,
        })
    }

    /// Removes the row and returns its prior contents.
    pub fn delete_todo(&self, id: &str) -> Result<TodoRecord, ApiError> {
        let conn = self.conn.lock().unwrap();
        let current = get_todo(&conn, id)?.ok_or(ApiError::NotFound)?;
        conn.execute("DELETE FROM todo WHERE id = ?1", params![id])?;
        Ok(current)
    }
}

fn get_todo(conn: &Connection, id: &str) -> Result<Option<TodoRecord>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, text, completed FROM todo WHERE id = ?1",
        params![id],
        row_to_todo,
    )
    .optional()
}

fn row_to_todo(row: &Row<'_>) -> Result<TodoRecord, rusqlite::Error> {
    Ok(TodoRecord {
        id: row.get(0)?,
        text: row.get(1)?,
        completed: row.get(2)?,
    })
}
