//! # Telecare Core
//!
//! Core business logic for refill check-ins.
//!
//! This crate contains pure data operations:
//! - Parsing an untrusted check-in body into a typed [`CheckinSubmission`]
//! - Shape validation matching the REST contract
//! - The triage rule that decides whether a provider must review a check-in
//! - Record construction with injected identifier and clock capabilities
//! - An in-memory review queue of evaluated check-ins
//!
//! **No API concerns**: HTTP servers, OpenAPI documents and CLI parsing belong in `api-rest`,
//! `api-shared` or `telecare-cli`.

pub mod checkin;
pub mod config;
pub mod constants;
pub mod error;
pub mod validation;

pub use checkin::{
    triage, CheckinFilter, CheckinRecord, CheckinResponses, CheckinService, CheckinStore,
    CheckinSubmission, EscalationReason, EvaluatedCheckin, ReportedSideEffect, TriageDecision,
};
pub use config::ServiceConfig;
pub use error::{CheckinError, CheckinResult};
pub use validation::{validate_checkin_body, FieldError};

pub use telecare_uuid::{CheckinId, Clock, IdGenerator};
