//! Input validation for the check-in REST contract.
//!
//! This is a shape check only: it rejects bodies whose typed fields carry the wrong JSON type.
//! Everything it accepts, and a good deal it would reject, is still handled totally by
//! [`CheckinSubmission::from_json`](crate::CheckinSubmission::from_json).

use serde::Serialize;
use serde_json::Value;

/// A single field-level validation failure.
///
/// Serialises as `{ "type": "field", "value": .., "msg": .., "path": .., "location": "body" }`,
/// the error shape the portal frontend already understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn new(path: impl Into<String>, value: Option<Value>, msg: impl Into<String>) -> Self {
        Self {
            kind: "field",
            value,
            msg: msg.into(),
            path: path.into(),
            location: "body",
        }
    }

    /// Error for a body that could not be read as a JSON object at all.
    pub fn body(msg: impl Into<String>) -> Self {
        Self::new("", None, msg)
    }
}

type Check = (&'static str, fn(&Value) -> bool, &'static str);

const CHECKS: [Check; 4] = [
    (
        "prescription_id",
        Value::is_string,
        "prescription_id must be a string if provided",
    ),
    ("side_effects", Value::is_array, "side_effects must be an array"),
    (
        "has_red_flags",
        Value::is_boolean,
        "has_red_flags must be a boolean",
    ),
    ("red_flags", Value::is_array, "red_flags must be an array"),
];

/// Validates the shape of a `POST /refill-checkins` body.
///
/// Optional fields are only checked when their key is present; an explicit `null` counts as
/// present and fails the type check. `responses`, `weight_log` and `photos_urls` accept any
/// value.
///
/// # Returns
/// Every failure in field order, or an empty vector if the body is acceptable.
pub fn validate_checkin_body(body: &Value) -> Vec<FieldError> {
    let Some(fields) = body.as_object() else {
        return vec![FieldError::body("request body must be a JSON object")];
    };

    CHECKS
        .iter()
        .filter_map(|(path, accepts, msg)| {
            let value = fields.get(*path)?;
            (!accepts(value)).then(|| FieldError::new(*path, Some(value.clone()), *msg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_valid() {
        assert!(validate_checkin_body(&json!({})).is_empty());
    }

    #[test]
    fn full_body_is_valid() {
        let body = json!({
            "prescription_id": "rx-1",
            "responses": {"effectiveness": 8},
            "side_effects": [{"severity": 2}],
            "has_red_flags": false,
            "red_flags": [],
            "weight_log": [{"kg": 81.2}],
            "photos_urls": ["https://example.test/a.jpg"]
        });
        assert!(validate_checkin_body(&body).is_empty());
    }

    #[test]
    fn free_form_fields_accept_anything() {
        let body = json!({"responses": "fine", "weight_log": 3, "photos_urls": null});
        assert!(validate_checkin_body(&body).is_empty());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = validate_checkin_body(&json!(["not", "an", "object"]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "");
        assert_eq!(errors[0].msg, "request body must be a JSON object");
    }

    #[test]
    fn wrong_types_are_reported_in_field_order() {
        let body = json!({
            "red_flags": "rash",
            "has_red_flags": "yes",
            "side_effects": "none",
            "prescription_id": 42
        });
        let errors = validate_checkin_body(&body);
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();

        assert_eq!(
            paths,
            vec!["prescription_id", "side_effects", "has_red_flags", "red_flags"]
        );
        assert_eq!(errors[1].msg, "side_effects must be an array");
        assert_eq!(errors[1].value, Some(json!("none")));
    }

    #[test]
    fn explicit_null_counts_as_present() {
        let errors = validate_checkin_body(&json!({"prescription_id": null}));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "prescription_id must be a string if provided");
    }

    #[test]
    fn serialises_in_express_validator_shape() {
        let error =
            FieldError::new("has_red_flags", Some(json!(1)), "has_red_flags must be a boolean");
        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "field",
                "value": 1,
                "msg": "has_red_flags must be a boolean",
                "path": "has_red_flags",
                "location": "body"
            })
        );
    }

    #[test]
    fn body_error_omits_value() {
        let value = serde_json::to_value(FieldError::body("bad json")).unwrap();
        assert!(value.get("value").is_none());
    }
}
