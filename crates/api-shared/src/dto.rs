//! Request and response bodies for the check-in API.
//!
//! Core types that carry free-form JSON are documented as plain objects in the OpenAPI schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use telecare_core::{CheckinRecord, EscalationReason, EvaluatedCheckin, FieldError};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /refill-checkins`.
///
/// Every field is optional. The handler reads the body as raw JSON so that wrongly typed
/// fields can be reported per field; this type documents the expected shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SubmitCheckinReq {
    pub prescription_id: Option<String>,
    /// Questionnaire answers. `effectiveness` (number, 1-10) and `continue_treatment` (text)
    /// drive triage; other keys are stored unchanged.
    #[schema(value_type = Option<Object>)]
    pub responses: Option<Value>,
    /// Reported side effects; entries whose `severity` (a number, or a numeric string) is 8
    /// or more escalate.
    #[schema(value_type = Option<Vec<Object>>)]
    pub side_effects: Option<Vec<Value>>,
    pub has_red_flags: Option<bool>,
    /// Named red flags; any entry escalates and entries are stored as submitted.
    #[schema(value_type = Option<Vec<Object>>)]
    pub red_flags: Option<Vec<Value>>,
    #[schema(value_type = Option<Object>)]
    pub weight_log: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub photos_urls: Option<Value>,
}

/// Response to an accepted check-in (HTTP 201).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitCheckinRes {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: CheckinRecord,
    pub requires_consultation: bool,
    pub message: String,
}

impl From<&EvaluatedCheckin> for SubmitCheckinRes {
    fn from(checkin: &EvaluatedCheckin) -> Self {
        Self {
            success: true,
            data: checkin.record.clone(),
            requires_consultation: checkin.requires_consultation(),
            message: checkin.decision.message().to_string(),
        }
    }
}

/// One stored check-in with the reasons it was, or was not, escalated.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckinEntry {
    #[schema(value_type = Object)]
    pub data: CheckinRecord,
    pub requires_consultation: bool,
    #[schema(value_type = Vec<String>)]
    pub reasons: Vec<EscalationReason>,
}

impl From<EvaluatedCheckin> for CheckinEntry {
    fn from(checkin: EvaluatedCheckin) -> Self {
        Self {
            requires_consultation: checkin.requires_consultation(),
            reasons: checkin.decision.reasons,
            data: checkin.record,
        }
    }
}

/// Response to `GET /refill-checkins/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GetCheckinRes {
    pub success: bool,
    #[serde(flatten)]
    pub entry: CheckinEntry,
}

/// Response to `GET /refill-checkins`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListCheckinsRes {
    pub success: bool,
    pub data: Vec<CheckinEntry>,
}

/// Field-level validation failures (HTTP 400).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorRes {
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<FieldError>,
}

/// Any other failure (HTTP 400, 404 or 500).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub success: bool,
    pub message: String,
}

impl ErrorRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
