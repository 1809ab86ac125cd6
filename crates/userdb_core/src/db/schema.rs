//! `users` table definition.
//!
//! # Invariants
//! - Schema creation is idempotent (`CREATE TABLE IF NOT EXISTS`).
//! - `user_id` is an `INTEGER PRIMARY KEY`, so SQLite assigns it on insert.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Table holding one row per user.
pub const USERS_TABLE: &str = "users";

const CREATE_USERS_SQL: &str = "CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY,
    name TEXT,
    age INTEGER
);";

/// Creates the `users` table when absent.
///
/// Runs in autocommit mode, so the schema change is committed on return.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_USERS_SQL).map_err(DbError::Schema)
}

/// Returns whether the `users` table is present on `conn`.
pub fn users_table_exists(conn: &Connection) -> DbResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [USERS_TABLE],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
