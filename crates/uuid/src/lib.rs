//! Identifier and time utilities for telecare check-ins.
//!
//! Check-in records carry a freshly generated identifier and a creation timestamp. Both are
//! supplied through small capability traits rather than global calls, so the code that builds
//! records can be driven with deterministic values in tests.
//!
//! ## Canonical identifier form
//! - Length: 36
//! - Lowercase hexadecimal groups of 8-4-4-4-12 separated by hyphens
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! This is the form produced by `Uuid::new_v4().hyphenated().to_string()`. Identifiers supplied
//! from outside (for example, a path segment on the REST API) must already be canonical; use
//! [`CheckinId::parse`] to validate them.
//!
//! ## Timestamps
//! Creation times are rendered as ISO-8601 UTC with millisecond precision, see
//! [`format_timestamp`].

mod clock;
mod service;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use service::{CheckinId, IdGenerator, RandomIdGenerator, SequentialIdGenerator, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
