//! Core user-record storage and service logic.
//! This crate owns the `users` schema and the caller-facing response rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserId, UserUpdate, UserValidationError};
pub use service::response::{ServiceErrorKind, UserResponse};
pub use service::user_service::{with_user_service, UserService};
pub use store::{SqliteUserStore, StoreError, StoreResult, UserStore};

/// Liveness check for callers linking `userdb_core`; used by `userdb ping`.
pub fn ping() -> &'static str {
    "pong"
}

/// Version of `userdb_core` reported by `userdb ping`.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
