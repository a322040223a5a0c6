//! Employee Storage
//! Mission: Own the employees table, enforce unique email

use crate::db::Database;
use crate::employees::models::Employee;
use chrono::Utc;
use rusqlite::{params, Connection, ErrorCode};
use std::fmt;

/// Store-level failures the API layer maps to status codes
#[derive(Debug)]
pub enum StoreError {
    DuplicateEmail,
    NotFound,
    Db(rusqlite::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "Email already exists"),
            StoreError::NotFound => write!(f, "Not found"),
            StoreError::Db(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        // The only constraint a write can hit is the unique index on email
        match &e {
            rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
                StoreError::DuplicateEmail
            }
            _ => StoreError::Db(e),
        }
    }
}

fn row_to_employee(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        position: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// Escape LIKE wildcards so the query string matches literally
fn escape_like(q: &str) -> String {
    q.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Employee store backed by the shared database
pub struct EmployeeStore {
    db: Database,
}

impl EmployeeStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All employees, newest first. A non-empty query filters by
    /// case-insensitive (ASCII) substring match on name.
    pub fn list(&self, query: Option<&str>) -> Result<Vec<Employee>, StoreError> {
        let conn = self.db.conn();
        let q = query.map(str::trim).unwrap_or("");

        if q.is_empty() {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, position, created_at, updated_at
                 FROM employees ORDER BY id DESC",
            )?;
            let rows = stmt
                .query_map([], row_to_employee)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        } else {
            let pattern = format!("%{}%", escape_like(q));
            let mut stmt = conn.prepare(
                "SELECT id, name, email, position, created_at, updated_at
                 FROM employees WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id DESC",
            )?;
            let rows = stmt
                .query_map(params![pattern], row_to_employee)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        }
    }

    /// Insert a new employee. One captured instant feeds both timestamps,
    /// so created_at == updated_at holds exactly on creation.
    pub fn create(&self, name: &str, email: &str, position: &str) -> Result<Employee, StoreError> {
        let now = Utc::now().to_rfc3339();
        let conn = self.db.conn();

        conn.execute(
            "INSERT INTO employees (name, email, position, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![name, email, position, now],
        )?;

        let id = conn.last_insert_rowid();
        Self::get(&conn, id)
    }

    /// Full replace of name/email/position; refreshes updated_at.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        position: &str,
    ) -> Result<Employee, StoreError> {
        let now = Utc::now().to_rfc3339();
        let conn = self.db.conn();

        let changes = conn.execute(
            "UPDATE employees SET name = ?1, email = ?2, position = ?3, updated_at = ?4
             WHERE id = ?5",
            params![name, email, position, now, id],
        )?;
        if changes == 0 {
            return Err(StoreError::NotFound);
        }

        Self::get(&conn, id)
    }

    /// Hard delete, no tombstone.
    pub fn remove(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.db.conn();

        let changes = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        if changes == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    fn get(conn: &Connection, id: i64) -> Result<Employee, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, name, email, position, created_at, updated_at
             FROM employees WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], row_to_employee) {
            Ok(employee) => Ok(employee),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
