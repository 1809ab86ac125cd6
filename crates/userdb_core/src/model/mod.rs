//! Domain model for user records.
//!
//! # Responsibility
//! - Define the value types shared by the store and service layers.
//!
//! # Invariants
//! - Every persisted user is identified by a backend-assigned `UserId`.
//! - `User` values are immutable snapshots; no layer mutates them in place.

pub mod user;
