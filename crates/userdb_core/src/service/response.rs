//! Service response envelope and status-code mapping.
//!
//! # Invariants
//! - Success payloads are `{user_id, name, age}`.
//! - Error payloads are `{error: <fixed message>}`.
//! - Each `ServiceErrorKind` maps to exactly one status code.

use crate::model::user::User;
use serde_json::{json, Value};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Fixed set of caller-facing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    InvalidName,
    InvalidAge,
    UserNotFound,
    CreateFailed,
    RetrieveFailed,
}

impl ServiceErrorKind {
    /// Message placed under the `error` key.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidName => "Invalid name",
            Self::InvalidAge => "Invalid age",
            Self::UserNotFound => "User not found",
            Self::CreateFailed => "Failed to create user",
            Self::RetrieveFailed => "Failed to retrieve user",
        }
    }

    pub fn status_code(self) -> u16 {
        match self {
            Self::InvalidName | Self::InvalidAge => STATUS_BAD_REQUEST,
            Self::UserNotFound => STATUS_NOT_FOUND,
            Self::CreateFailed | Self::RetrieveFailed => STATUS_INTERNAL_ERROR,
        }
    }
}

/// Outcome of one service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResponse {
    /// A user was persisted; echoes the stored values.
    Created(User),
    /// A lookup matched.
    Found(User),
    Error(ServiceErrorKind),
}

impl UserResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Created(_) => STATUS_CREATED,
            Self::Found(_) => STATUS_OK,
            Self::Error(kind) => kind.status_code(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Created(user) | Self::Found(user) => Some(user),
            Self::Error(_) => None,
        }
    }

    pub fn error_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Self::Error(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Builds the JSON payload for this response.
    pub fn payload(&self) -> Value {
        match self {
            Self::Created(user) | Self::Found(user) => json!(user),
            Self::Error(kind) => json!({ "error": kind.message() }),
        }
    }

    /// Splits into the `(payload, status)` pair used at API boundaries.
    pub fn into_parts(self) -> (Value, u16) {
        (self.payload(), self.status_code())
    }
}
