//! Constants used throughout the telecare core crate.
//!
//! The triage thresholds and keywords are placeholder business rules carried over unchanged
//! from the patient portal. They have no documented clinical basis.

/// A reported side effect at or above this severity escalates the check-in.
pub const SEVERE_SIDE_EFFECT_THRESHOLD: f64 = 8.0;

/// A reported effectiveness at or below this score escalates the check-in.
pub const LOW_EFFECTIVENESS_THRESHOLD: f64 = 3.0;

/// Lower-case phrases in the `continue_treatment` answer that mean the patient wants a change.
pub const CHANGE_REQUEST_KEYWORDS: [&str; 3] = ["adjust", "try something else", "discuss"];

/// Response key holding the patient-reported effectiveness score.
pub const EFFECTIVENESS_KEY: &str = "effectiveness";

/// Response key holding the patient's free-text intent about continuing treatment.
pub const CONTINUE_TREATMENT_KEY: &str = "continue_treatment";

/// Message returned when a provider must review the check-in.
pub const ESCALATED_MESSAGE: &str =
    "Check-in received. A provider will follow up based on your responses.";

/// Message returned when the patient may continue unchanged.
pub const CLEARED_MESSAGE: &str = "Check-in received. You are cleared to continue your treatment.";

/// Default REST listen address when none is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Check-ins kept in the in-memory review queue before the oldest are evicted.
pub const DEFAULT_REVIEW_QUEUE_CAPACITY: usize = 10_000;
