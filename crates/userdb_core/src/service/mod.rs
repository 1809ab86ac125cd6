//! Core use-case services.
//!
//! # Responsibility
//! - Validate caller input and orchestrate store calls.
//! - Shape every outcome into a response with a stable status code.

pub mod response;
pub mod user_service;
