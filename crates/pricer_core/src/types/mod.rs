//! Core financial types.
//!
//! This module provides:
//! - `error`: Structured error types for input validation
//!
//! # Re-exports
//!
//! - [`ValidationError`] from `error`

pub mod error;

pub use error::ValidationError;
