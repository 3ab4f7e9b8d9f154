//! Boundary parsing of check-in bodies.
//!
//! All defensive coercion happens here, once. The triage rule downstream only ever sees typed
//! values.

use crate::constants::{CONTINUE_TREATMENT_KEY, EFFECTIVENESS_KEY};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// The patient's answers to the check-in questionnaire.
///
/// The submitted object is kept verbatim for storage. The two answers the triage rule reads are
/// parsed into typed views when they carry the expected JSON type; otherwise they are left
/// opaque in the raw object and the typed view is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinResponses {
    raw: Map<String, Value>,
    effectiveness: Option<f64>,
    continue_treatment: Option<String>,
}

impl CheckinResponses {
    /// Parses a `responses` value. Anything other than a JSON object yields empty responses.
    pub fn from_json(value: &Value) -> Self {
        let Some(raw) = value.as_object() else {
            return Self::default();
        };

        Self {
            effectiveness: raw.get(EFFECTIVENESS_KEY).and_then(Value::as_f64),
            continue_treatment: raw
                .get(CONTINUE_TREATMENT_KEY)
                .and_then(Value::as_str)
                .map(str::to_owned),
            raw: raw.clone(),
        }
    }

    /// Patient-reported effectiveness, expected on a 1-10 scale.
    pub fn effectiveness(&self) -> Option<f64> {
        self.effectiveness
    }

    /// Free-text answer about continuing the current treatment.
    pub fn continue_treatment(&self) -> Option<&str> {
        self.continue_treatment.as_deref()
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl Serialize for CheckinResponses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// One reported side effect.
///
/// Only `severity` is interpreted. It counts when it is a JSON number or a string holding a
/// finite number (`"9"`); anything else reads as no severity. The entry itself is kept as
/// submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedSideEffect {
    raw: Value,
    severity: Option<f64>,
}

impl ReportedSideEffect {
    pub fn from_json(value: &Value) -> Self {
        Self {
            severity: value.get("severity").and_then(severity_score),
            raw: value.clone(),
        }
    }

    pub fn severity(&self) -> Option<f64> {
        self.severity
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl Serialize for ReportedSideEffect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// A typed refill check-in as submitted by a patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinSubmission {
    /// Opaque prescription reference; never dereferenced here.
    pub prescription_id: Option<String>,
    pub responses: CheckinResponses,
    pub side_effects: Vec<ReportedSideEffect>,
    /// The patient's own red-flag answer, before normalisation.
    pub has_red_flags: bool,
    /// Named red flags, kept exactly as submitted.
    pub red_flags: Vec<Value>,
    pub weight_log: Option<Value>,
    pub photos_urls: Option<Value>,
}

impl CheckinSubmission {
    /// Parses an untrusted check-in body.
    ///
    /// This never fails. Each field falls back to its default when missing or of the wrong
    /// type:
    /// - `prescription_id`: kept only if it is a string
    /// - `responses`: see [`CheckinResponses::from_json`]
    /// - `side_effects`: kept only if it is an array
    /// - `has_red_flags`: `true` only for JSON `true`
    /// - `red_flags`: kept only if it is an array, entries unchanged
    /// - `weight_log`, `photos_urls`: passed through, `null` treated as absent
    pub fn from_json(body: &Value) -> Self {
        let field = |key: &str| body.get(key);

        Self {
            prescription_id: field("prescription_id")
                .and_then(Value::as_str)
                .map(str::to_owned),
            responses: field("responses")
                .map(CheckinResponses::from_json)
                .unwrap_or_default(),
            side_effects: field("side_effects")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().map(ReportedSideEffect::from_json).collect())
                .unwrap_or_default(),
            has_red_flags: field("has_red_flags")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            red_flags: field("red_flags")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            weight_log: passthrough(field("weight_log")),
            photos_urls: passthrough(field("photos_urls")),
        }
    }
}

fn severity_score(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        other => other.as_f64(),
    }
}

fn passthrough(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
