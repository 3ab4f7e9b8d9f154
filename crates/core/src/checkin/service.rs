use super::{triage, CheckinRecord, CheckinSubmission, TriageDecision};
use serde::Serialize;
use std::sync::Arc;
use telecare_uuid::{Clock, IdGenerator, RandomIdGenerator, SystemClock};

/// A check-in record together with the triage decision made for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedCheckin {
    pub record: CheckinRecord,
    pub decision: TriageDecision,
}

impl EvaluatedCheckin {
    pub fn requires_consultation(&self) -> bool {
        self.decision.requires_consultation
    }
}

/// Evaluates refill check-ins.
///
/// Identifier allocation and the clock are injected so that callers (and tests) control every
/// source of non-determinism. The decision itself depends only on the submission.
#[derive(Clone)]
pub struct CheckinService {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CheckinService {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Triages `submission` and builds its normalised record.
    ///
    /// This cannot fail: every malformed field was already defaulted by
    /// [`CheckinSubmission::from_json`].
    pub fn evaluate_refill_checkin(&self, submission: CheckinSubmission) -> EvaluatedCheckin {
        let decision = triage(&submission);
        let record = CheckinRecord::new(self.ids.next_id(), self.clock.now(), submission);

        tracing::info!(
            checkin_id = %record.id,
            requires_consultation = decision.requires_consultation,
            reasons = ?decision.reasons,
            "refill check-in evaluated"
        );

        EvaluatedCheckin { record, decision }
    }
}

impl Default for CheckinService {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator), Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CLEARED_MESSAGE, ESCALATED_MESSAGE};
    use crate::EscalationReason;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use telecare_uuid::{CheckinId, FixedClock, SequentialIdGenerator};

    fn service() -> CheckinService {
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        CheckinService::new(
            Arc::new(SequentialIdGenerator::default()),
            Arc::new(FixedClock::new(at)),
        )
    }

    fn evaluate(service: &CheckinService, body: Value) -> EvaluatedCheckin {
        service.evaluate_refill_checkin(CheckinSubmission::from_json(&body))
    }

    #[test]
    fn clean_checkin_is_cleared() {
        let evaluated = evaluate(
            &service(),
            json!({
                "prescription_id": "rx-1",
                "responses": {"effectiveness": 8, "continue_treatment": "continue as is"},
                "side_effects": [],
                "has_red_flags": false,
                "red_flags": []
            }),
        );

        assert!(!evaluated.requires_consultation());
        assert_eq!(evaluated.decision.message(), CLEARED_MESSAGE);
        assert_eq!(evaluated.record.prescription_id.as_deref(), Some("rx-1"));
    }

    #[test]
    fn severe_side_effect_escalates() {
        let evaluated = evaluate(
            &service(),
            json!({
                "responses": {"effectiveness": 7},
                "side_effects": [{"severity": 9, "name": "severe rash"}]
            }),
        );

        assert!(evaluated.requires_consultation());
        assert_eq!(
            evaluated.decision.reasons,
            vec![EscalationReason::SevereSideEffect]
        );
        assert_eq!(evaluated.decision.message(), ESCALATED_MESSAGE);
    }

    #[test]
    fn explicit_flag_escalates_when_all_else_nominal() {
        let evaluated = evaluate(
            &service(),
            json!({
                "has_red_flags": true,
                "responses": {"effectiveness": 9, "continue_treatment": "all good"}
            }),
        );

        assert!(evaluated.requires_consultation());
        assert!(evaluated.record.has_red_flags);
    }

    #[test]
    fn uses_injected_id_and_clock() {
        let service = service();
        let first = evaluate(&service, json!({}));
        let second = evaluate(&service, json!({}));

        assert_eq!(
            first.record.id,
            CheckinId::parse("00000000-0000-4000-8000-000000000001").unwrap()
        );
        assert_eq!(
            second.record.id,
            CheckinId::parse("00000000-0000-4000-8000-000000000002").unwrap()
        );
        assert_eq!(first.record.created_at, second.record.created_at);
    }

    #[test]
    fn repeated_evaluation_differs_only_in_id() {
        let service = service();
        let body = json!({
            "prescription_id": "rx-9",
            "responses": {"effectiveness": 2},
            "red_flags": ["swelling"]
        });
        let mut first = evaluate(&service, body.clone());
        let second = evaluate(&service, body);

        assert_ne!(first.record.id, second.record.id);
        first.record.id = second.record.id;
        assert_eq!(first, second);
    }

    #[test]
    fn default_service_generates_random_ids() {
        let service = CheckinService::default();
        let first = evaluate(&service, json!({}));
        let second = evaluate(&service, json!({}));

        assert_ne!(first.record.id, second.record.id);
    }
}
