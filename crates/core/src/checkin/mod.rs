//! Refill check-ins: parse, triage, record, queue.
//!
//! A check-in flows through four steps:
//! 1. [`CheckinSubmission::from_json`] turns an untrusted body into typed fields.
//! 2. [`triage`] decides whether a provider must review it.
//! 3. [`CheckinService`] stamps an identifier and creation time onto a [`CheckinRecord`].
//! 4. [`CheckinStore`] keeps evaluated check-ins for the provider review queue.

mod record;
mod service;
mod store;
mod submission;
mod triage;

pub use record::CheckinRecord;
pub use service::{CheckinService, EvaluatedCheckin};
pub use store::{CheckinFilter, CheckinStore};
pub use submission::{CheckinResponses, CheckinSubmission, ReportedSideEffect};
pub use triage::{triage, EscalationReason, TriageDecision};
