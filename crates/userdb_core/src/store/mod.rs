//! User store contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the CRUD capability the service layer depends on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Stores perform no business-rule validation.
//! - A lookup miss is `Ok(None)`, never an error.
//! - Errors are logged where they happen and then returned unchanged.

use crate::db::DbError;
use crate::model::user::{User, UserId, UserUpdate};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod sqlite;

pub use sqlite::SqliteUserStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by user store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Any failure reported by the storage engine.
    Backend(DbError),
    /// Caller-contract violation detected before reaching the backend.
    InvalidArgument(&'static str),
}

impl StoreError {
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "backend error: {err}"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::InvalidArgument(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Backend(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Backend(DbError::Sqlite(value))
    }
}

/// CRUD capability over user records.
///
/// Every successful write is durable before the call returns.
pub trait UserStore {
    /// Inserts a user and returns the backend-assigned id.
    fn insert_user(&self, name: &str, age: i64) -> StoreResult<UserId>;

    /// Looks up one user; `Ok(None)` when no row matches.
    fn get_user(&self, user_id: UserId) -> StoreResult<Option<User>>;

    /// Applies the supplied fields and returns the modified row count.
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when `update` is empty.
    fn update_user(&self, user_id: UserId, update: &UserUpdate) -> StoreResult<usize>;

    /// Deletes one user and returns the removed row count.
    fn delete_user(&self, user_id: UserId) -> StoreResult<usize>;

    /// Releases the underlying connection.
    fn close(self) -> StoreResult<()>
    where
        Self: Sized;
}
