//! # API Shared
//!
//! Shared definitions for the telecare APIs.
//!
//! Contains:
//! - Wire types for requests and responses (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `telecare-cli` so both speak the same JSON.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
