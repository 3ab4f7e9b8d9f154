use super::{CheckinResponses, CheckinSubmission, ReportedSideEffect};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use telecare_uuid::{format_timestamp, CheckinId};

/// A normalised check-in as returned to the caller and kept in the review queue.
///
/// `has_red_flags` is the OR of the patient's answer and a non-empty `red_flags` list, so it
/// agrees with what the triage rule saw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckinRecord {
    pub id: CheckinId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription_id: Option<String>,
    pub responses: CheckinResponses,
    pub side_effects: Vec<ReportedSideEffect>,
    pub has_red_flags: bool,
    pub red_flags: Vec<Value>,
    pub weight_log: Option<Value>,
    pub photos_urls: Option<Value>,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl CheckinRecord {
    pub fn new(id: CheckinId, created_at: DateTime<Utc>, submission: CheckinSubmission) -> Self {
        let has_red_flags = submission.has_red_flags || !submission.red_flags.is_empty();

        Self {
            id,
            prescription_id: submission.prescription_id,
            responses: submission.responses,
            side_effects: submission.side_effects,
            has_red_flags,
            red_flags: submission.red_flags,
            weight_log: submission.weight_log,
            photos_urls: submission.photos_urls,
            created_at,
        }
    }
}

fn serialize_created_at<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(*at))
}
