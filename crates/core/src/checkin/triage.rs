//! The refill check-in triage rule.
//!
//! A check-in is escalated to a provider when any of four independent conditions holds:
//! - the patient reported a red flag, either by answering yes or by naming one
//! - any side effect has severity of at least [`SEVERE_SIDE_EFFECT_THRESHOLD`]
//! - effectiveness is at most [`LOW_EFFECTIVENESS_THRESHOLD`]
//! - the `continue_treatment` answer contains one of [`CHANGE_REQUEST_KEYWORDS`], ignoring case
//!
//! The rule is pure: the same submission always yields the same decision.

use super::CheckinSubmission;
use crate::constants::{
    CHANGE_REQUEST_KEYWORDS, CLEARED_MESSAGE, ESCALATED_MESSAGE, LOW_EFFECTIVENESS_THRESHOLD,
    SEVERE_SIDE_EFFECT_THRESHOLD,
};
use serde::Serialize;
use std::fmt;

/// A condition that sent the check-in to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationReason {
    RedFlag,
    SevereSideEffect,
    LowEffectiveness,
    RequestedChange,
}

impl fmt::Display for EscalationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RedFlag => "red flag reported",
            Self::SevereSideEffect => "severe side effect",
            Self::LowEffectiveness => "low effectiveness",
            Self::RequestedChange => "patient requested a change",
        };
        f.write_str(label)
    }
}

/// Outcome of triaging one check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageDecision {
    pub requires_consultation: bool,
    /// Every condition that fired, in rule order.
    pub reasons: Vec<EscalationReason>,
}

impl TriageDecision {
    fn from_reasons(reasons: Vec<EscalationReason>) -> Self {
        Self {
            requires_consultation: !reasons.is_empty(),
            reasons,
        }
    }

    /// The fixed message shown to the patient.
    pub fn message(&self) -> &'static str {
        if self.requires_consultation {
            ESCALATED_MESSAGE
        } else {
            CLEARED_MESSAGE
        }
    }
}

/// Decides whether a provider must review `submission` before treatment continues.
pub fn triage(submission: &CheckinSubmission) -> TriageDecision {
    let checks = [
        (EscalationReason::RedFlag, has_red_flag(submission)),
        (
            EscalationReason::SevereSideEffect,
            has_severe_side_effect(submission),
        ),
        (
            EscalationReason::LowEffectiveness,
            has_low_effectiveness(submission),
        ),
        (
            EscalationReason::RequestedChange,
            wants_change(submission),
        ),
    ];

    TriageDecision::from_reasons(
        checks
            .into_iter()
            .filter_map(|(reason, fired)| fired.then_some(reason))
            .collect(),
    )
}

fn has_red_flag(submission: &CheckinSubmission) -> bool {
    submission.has_red_flags || !submission.red_flags.is_empty()
}

fn has_severe_side_effect(submission: &CheckinSubmission) -> bool {
    submission
        .side_effects
        .iter()
        .any(|se| se.severity().unwrap_or(0.0) >= SEVERE_SIDE_EFFECT_THRESHOLD)
}

fn has_low_effectiveness(submission: &CheckinSubmission) -> bool {
    submission
        .responses
        .effectiveness()
        .is_some_and(|score| score <= LOW_EFFECTIVENESS_THRESHOLD)
}

fn wants_change(submission: &CheckinSubmission) -> bool {
    let answer = submission
        .responses
        .continue_treatment()
        .unwrap_or_default()
        .to_lowercase();
    CHANGE_REQUEST_KEYWORDS
        .iter()
        .any(|keyword| answer.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn decide(body: Value) -> TriageDecision {
        triage(&CheckinSubmission::from_json(&body))
    }

    fn requires(body: Value) -> bool {
        decide(body).requires_consultation
    }

    #[test]
    fn empty_submission_is_cleared() {
        let decision = decide(json!({}));

        assert!(!decision.requires_consultation);
        assert!(decision.reasons.is_empty());
        assert_eq!(decision.message(), CLEARED_MESSAGE);
    }

    #[test]
    fn explicit_red_flag_escalates() {
        assert_eq!(
            decide(json!({"has_red_flags": true})).reasons,
            vec![EscalationReason::RedFlag]
        );
    }

    #[test]
    fn named_red_flag_escalates() {
        assert!(requires(json!({"red_flags": ["rash"]})));
    }

    #[test]
    fn empty_red_flags_do_not_escalate() {
        assert!(!requires(json!({"red_flags": []})));
        assert!(!requires(json!({"red_flags": [], "has_red_flags": false})));
    }

    #[test]
    fn severity_boundary() {
        assert!(requires(json!({"side_effects": [{"severity": 8}]})));
        assert!(requires(json!({"side_effects": [{"severity": 9}]})));
        assert!(!requires(json!({"side_effects": [{"severity": 7}]})));
        assert!(!requires(json!({"side_effects": [{"severity": 7.99}]})));
    }

    #[test]
    fn any_severe_entry_escalates() {
        let decision = decide(json!({
            "side_effects": [{"severity": 1}, {"name": "no score"}, {"severity": 8.5}]
        }));
        assert_eq!(decision.reasons, vec![EscalationReason::SevereSideEffect]);
    }

    #[test]
    fn side_effects_without_severity_never_escalate() {
        assert!(!requires(json!({"side_effects": [{"name": "dry mouth"}, "tired"]})));
    }

    #[test]
    fn string_severity_escalates() {
        assert_eq!(
            decide(json!({"side_effects": [{"severity": "9"}]})).reasons,
            vec![EscalationReason::SevereSideEffect]
        );
        assert!(!requires(json!({"side_effects": [{"severity": "7"}]})));
        assert!(!requires(json!({"side_effects": [{"severity": "severe"}]})));
    }

    #[test]
    fn non_sequence_side_effects_are_tolerated() {
        assert!(!requires(json!({"side_effects": "none"})));
        assert!(!requires(json!({"side_effects": {"severity": 10}})));
    }

    #[test]
    fn effectiveness_boundary() {
        assert!(requires(json!({"responses": {"effectiveness": 3}})));
        assert!(requires(json!({"responses": {"effectiveness": 2}})));
        assert!(!requires(json!({"responses": {"effectiveness": 4}})));
        assert!(!requires(json!({"responses": {"effectiveness": 3.01}})));
    }

    #[test]
    fn non_numeric_effectiveness_never_escalates() {
        assert!(!requires(json!({"responses": {"effectiveness": "1"}})));
        assert!(!requires(json!({"responses": {"effectiveness": null}})));
    }

    #[test]
    fn change_keywords_match_case_insensitively() {
        assert!(requires(json!({"responses": {"continue_treatment": "I want to ADJUST my dose"}})));
        assert!(requires(json!({"responses": {"continue_treatment": "Let's Try Something Else"}})));
        assert!(requires(json!({"responses": {"continue_treatment": "would like to discuss"}})));
    }

    #[test]
    fn plain_continue_answer_does_not_escalate() {
        assert!(!requires(json!({
            "responses": {"continue_treatment": "I'm happy, continue as is"}
        })));
    }

    #[test]
    fn non_string_continue_answer_never_matches() {
        assert!(!requires(json!({"responses": {"continue_treatment": 5}})));
    }

    #[test]
    fn all_reasons_are_reported_in_rule_order() {
        let decision = decide(json!({
            "responses": {"effectiveness": 1, "continue_treatment": "discuss"},
            "side_effects": [{"severity": 10}],
            "red_flags": ["chest pain"]
        }));

        assert_eq!(
            decision.reasons,
            vec![
                EscalationReason::RedFlag,
                EscalationReason::SevereSideEffect,
                EscalationReason::LowEffectiveness,
                EscalationReason::RequestedChange,
            ]
        );
        assert_eq!(decision.message(), ESCALATED_MESSAGE);
    }

    #[test]
    fn decision_is_deterministic() {
        let body = json!({
            "responses": {"effectiveness": 5, "continue_treatment": "adjust please"},
            "side_effects": [{"severity": 4}]
        });
        let submission = CheckinSubmission::from_json(&body);

        assert_eq!(triage(&submission), triage(&submission));
    }

    #[test]
    fn reasons_serialise_as_snake_case() {
        let value = serde_json::to_value(EscalationReason::SevereSideEffect).unwrap();
        assert_eq!(value, json!("severe_side_effect"));
    }
}
