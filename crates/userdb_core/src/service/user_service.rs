//! User use-case service.
//!
//! # Responsibility
//! - Validate create input before any store call.
//! - Delegate persistence to a `UserStore` implementation.
//! - Convert every store outcome into a `UserResponse`.
//!
//! # Invariants
//! - Public operations never return store errors; failures are logged and
//!   mapped to 500-class responses.
//! - Lookup misses map to 404, distinct from backend failures.
//! - The store is closed exactly once, by `shutdown`.

use crate::model::user::{validate_age, validate_name, User, UserId};
use crate::service::response::{ServiceErrorKind, UserResponse};
use crate::store::{SqliteUserStore, StoreResult, UserStore};
use log::{error, info, warn};
use std::path::Path;

/// Use-case service over a user store.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store for operations the service does not wrap.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates input and persists a new user.
    ///
    /// # Contract
    /// - Empty `name` -> `InvalidName` (400), store untouched.
    /// - `age <= 0` -> `InvalidAge` (400), store untouched.
    /// - Store failure -> `CreateFailed` (500).
    pub fn create_user(&self, name: &str, age: i64) -> UserResponse {
        if let Err(err) = validate_name(name) {
            warn!("event=user_create module=service status=rejected reason={err}");
            return UserResponse::Error(ServiceErrorKind::InvalidName);
        }
        if let Err(err) = validate_age(age) {
            warn!("event=user_create module=service status=rejected reason={err}");
            return UserResponse::Error(ServiceErrorKind::InvalidAge);
        }

        match self.store.insert_user(name, age) {
            Ok(user_id) => {
                info!("event=user_create module=service status=ok user_id={user_id}");
                UserResponse::Created(User::new(user_id, name, age))
            }
            Err(err) => {
                error!("event=user_create module=service status=error error={err}");
                UserResponse::Error(ServiceErrorKind::CreateFailed)
            }
        }
    }

    /// Looks up one user by id.
    pub fn get_user(&self, user_id: UserId) -> UserResponse {
        match self.store.get_user(user_id) {
            Ok(Some(user)) => UserResponse::Found(user),
            Ok(None) => {
                info!("event=user_get module=service status=not_found user_id={user_id}");
                UserResponse::Error(ServiceErrorKind::UserNotFound)
            }
            Err(err) => {
                error!(
                    "event=user_get module=service status=error user_id={user_id} error={err}"
                );
                UserResponse::Error(ServiceErrorKind::RetrieveFailed)
            }
        }
    }

    /// Runs `f` against a service over `store`, then shuts it down.
    pub fn scoped<T>(store: S, f: impl FnOnce(&Self) -> T) -> T {
        let service = Self::new(store);
        let output = f(&service);
        service.shutdown();
        output
    }

    /// Closes the store. Close failures are logged and swallowed.
    pub fn shutdown(self) {
        match self.store.close() {
            Ok(()) => info!("event=service_shutdown module=service status=ok"),
            Err(err) => {
                error!("event=service_shutdown module=service status=error error={err}")
            }
        }
    }
}

/// Opens a SQLite-backed service, runs `f`, then shuts the service down.
///
/// # Errors
/// - Returns the store error when the database cannot be opened; `f` does
///   not run in that case.
pub fn with_user_service<T>(
    path: impl AsRef<Path>,
    f: impl FnOnce(&UserService<SqliteUserStore>) -> T,
) -> StoreResult<T> {
    let store = SqliteUserStore::open(path)?;
    Ok(UserService::scoped(store, f))
}
