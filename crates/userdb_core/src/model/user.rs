//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record and the partial-update value type.
//! - Provide the input rules the service layer enforces before persistence.
//!
//! # Invariants
//! - `user_id` is assigned by the backend on insert and never reused.
//! - A valid user has a non-empty `name` and a strictly positive `age`.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Backend-assigned identifier of a user row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// Canonical user record as stored in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(user_id: UserId, name: impl Into<String>, age: i64) -> Self {
        Self {
            user_id,
            name: name.into(),
            age,
        }
    }
}

/// Input rule violations for user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    /// `name` is the empty string.
    EmptyName,
    /// `age` is zero or negative.
    NonPositiveAge(i64),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NonPositiveAge(age) => write!(f, "age must be positive, got {age}"),
        }
    }
}

impl Error for UserValidationError {}

/// Checks the `name` rule for new users.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    Ok(())
}

/// Checks the `age` rule for new users.
pub fn validate_age(age: i64) -> Result<(), UserValidationError> {
    if age <= 0 {
        return Err(UserValidationError::NonPositiveAge(age));
    }
    Ok(())
}

/// Set of fields to change on an existing user.
///
/// `None` means "leave unchanged". `Some` always writes, so an explicit
/// empty name or zero age is a real update rather than a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UserUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age: None,
        }
    }

    pub fn age(age: i64) -> Self {
        Self {
            name: None,
            age: Some(age),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Returns whether no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
