//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the user store.
//! - Ensure the `users` table exists before any data access.
//!
//! # Invariants
//! - Connections are returned only after the schema statement succeeded.
//! - Every backend failure keeps the underlying `rusqlite::Error` as source.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory, open_db_read_only};

pub type DbResult<T> = Result<T, DbError>;

/// Failure reported by the SQLite backend.
#[derive(Debug)]
pub enum DbError {
    /// The connection target could not be opened.
    Open {
        target: String,
        source: rusqlite::Error,
    },
    /// Connection setup or the schema statement failed.
    Schema(rusqlite::Error),
    /// SQLite refused to release the connection.
    Close(rusqlite::Error),
    /// Statement execution or row decoding failed.
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Returns the underlying SQLite error.
    pub fn sqlite_error(&self) -> &rusqlite::Error {
        match self {
            Self::Open { source, .. } => source,
            Self::Schema(err) | Self::Close(err) | Self::Sqlite(err) => err,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { target, source } => {
                write!(f, "failed to open database `{target}`: {source}")
            }
            Self::Schema(err) => write!(f, "failed to prepare users schema: {err}"),
            Self::Close(err) => write!(f, "failed to close database connection: {err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.sqlite_error())
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
