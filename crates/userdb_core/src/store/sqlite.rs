//! SQLite-backed user store.
//!
//! # Invariants
//! - The store exclusively owns its connection.
//! - Statements run in autocommit mode, so each write commits with its
//!   mutating statement.

use super::{StoreError, StoreResult, UserStore};
use crate::db::{open_db, open_db_in_memory, open_db_read_only, DbError};
use crate::model::user::{User, UserId, UserUpdate};
use log::{debug, error};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const USER_SELECT_SQL: &str = "SELECT user_id, name, age FROM users WHERE user_id = ?1;";

/// User store over one SQLite connection.
pub struct SqliteUserStore {
    conn: Connection,
}

impl SqliteUserStore {
    /// Opens the database at `path` and ensures the `users` table exists.
    ///
    /// Construction is all-or-nothing: no store exists unless both the
    /// connection and the schema statement succeeded.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self { conn })
    }

    /// Opens an existing database without write access.
    ///
    /// Reads work as usual; every write fails with `StoreError::Backend`.
    pub fn open_read_only(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db_read_only(path)?;
        Ok(Self { conn })
    }
}

impl UserStore for SqliteUserStore {
    fn insert_user(&self, name: &str, age: i64) -> StoreResult<UserId> {
        self.conn
            .execute(
                "INSERT INTO users (name, age) VALUES (?1, ?2);",
                params![name, age],
            )
            .map_err(|err| log_backend_error("user_insert", err))?;

        let user_id = self.conn.last_insert_rowid();
        debug!("event=user_insert module=store status=ok user_id={user_id}");
        Ok(user_id)
    }

    fn get_user(&self, user_id: UserId) -> StoreResult<Option<User>> {
        let user = self
            .conn
            .query_row(USER_SELECT_SQL, [user_id], parse_user_row)
            .optional()
            .map_err(|err| log_backend_error("user_get", err))?;

        debug!(
            "event=user_get module=store status=ok user_id={} found={}",
            user_id,
            user.is_some()
        );
        Ok(user)
    }

    fn update_user(&self, user_id: UserId, update: &UserUpdate) -> StoreResult<usize> {
        if update.is_empty() {
            error!(
                "event=user_update module=store status=error error_code=invalid_argument user_id={user_id}"
            );
            return Err(StoreError::InvalidArgument("no fields provided for update"));
        }

        let mut assignments = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();
        if let Some(name) = &update.name {
            assignments.push("name = ?");
            bind_values.push(Value::Text(name.clone()));
        }
        if let Some(age) = update.age {
            assignments.push("age = ?");
            bind_values.push(Value::Integer(age));
        }
        bind_values.push(Value::Integer(user_id));

        let sql = format!(
            "UPDATE users SET {} WHERE user_id = ?;",
            assignments.join(", ")
        );
        let changed = self
            .conn
            .execute(&sql, params_from_iter(bind_values))
            .map_err(|err| log_backend_error("user_update", err))?;

        debug!("event=user_update module=store status=ok user_id={user_id} rows={changed}");
        Ok(changed)
    }

    fn delete_user(&self, user_id: UserId) -> StoreResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE user_id = ?1;", [user_id])
            .map_err(|err| log_backend_error("user_delete", err))?;

        debug!("event=user_delete module=store status=ok user_id={user_id} rows={changed}");
        Ok(changed)
    }

    fn close(self) -> StoreResult<()> {
        match self.conn.close() {
            Ok(()) => {
                debug!("event=db_close module=store status=ok");
                Ok(())
            }
            // The connection handed back here is dropped, which finalizes it.
            Err((_conn, err)) => {
                error!("event=db_close module=store status=error error={err}");
                Err(StoreError::Backend(DbError::Close(err)))
            }
        }
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        age: row.get("age")?,
    })
}

fn log_backend_error(event: &str, err: rusqlite::Error) -> StoreError {
    error!("event={event} module=store status=error error_code=backend error={err}");
    StoreError::from(err)
}
