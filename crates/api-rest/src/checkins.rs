//! Handlers for `/refill-checkins`.

use crate::{ApiError, AppState};
use api_shared::{
    ErrorRes, GetCheckinRes, ListCheckinsRes, SubmitCheckinReq, SubmitCheckinRes,
    ValidationErrorRes,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use telecare_core::{
    validate_checkin_body, CheckinFilter, CheckinId, CheckinSubmission, FieldError,
};

#[utoipa::path(
    post,
    path = "/refill-checkins",
    request_body = SubmitCheckinReq,
    responses(
        (status = 201, description = "Check-in evaluated", body = SubmitCheckinRes),
        (status = 400, description = "Validation failed", body = ValidationErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Submit a refill check-in.
///
/// The body is validated for shape, parsed into a typed submission, triaged, and queued. The
/// response tells the patient whether a provider will follow up.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is not valid JSON or not a JSON object, or
/// - a typed field carries the wrong JSON type.
///
/// Returns `500 Internal Server Error` if the review queue cannot accept the check-in.
#[axum::debug_handler]
pub(crate) async fn submit_checkin(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitCheckinRes>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected check-in body: {}", rejection.body_text());
        ApiError::Validation(vec![FieldError::body(rejection.body_text())])
    })?;

    let errors = validate_checkin_body(&body);
    if !errors.is_empty() {
        tracing::warn!("Check-in failed validation with {} error(s)", errors.len());
        return Err(ApiError::Validation(errors));
    }

    let evaluated = state
        .service
        .evaluate_refill_checkin(CheckinSubmission::from_json(&body));
    state.store.insert(evaluated.clone())?;

    Ok((StatusCode::CREATED, Json(SubmitCheckinRes::from(&evaluated))))
}

#[utoipa::path(
    get,
    path = "/refill-checkins",
    params(
        (
            "requires_consultation" = Option<bool>,
            Query,
            description = "Only check-ins with this decision"
        ),
        (
            "prescription_id" = Option<String>,
            Query,
            description = "Only check-ins for this prescription"
        )
    ),
    responses(
        (status = 200, description = "Stored check-ins, oldest first", body = ListCheckinsRes),
        (status = 400, description = "Bad query string", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List stored check-ins, for example the provider review queue
/// (`?requires_consultation=true`).
#[axum::debug_handler]
pub(crate) async fn list_checkins(
    State(state): State<AppState>,
    filter: Result<Query<CheckinFilter>, QueryRejection>,
) -> Result<Json<ListCheckinsRes>, ApiError> {
    let Query(filter) = filter.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let checkins = state.store.list(&filter)?;

    Ok(Json(ListCheckinsRes {
        success: true,
        data: checkins.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/refill-checkins/{id}",
    params(
        ("id" = String, Path, description = "Check-in id (lowercase hyphenated UUID)")
    ),
    responses(
        (status = 200, description = "Check-in found", body = GetCheckinRes),
        (status = 400, description = "Invalid check-in id", body = ErrorRes),
        (status = 404, description = "Unknown check-in", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Fetch one stored check-in with its decision.
#[axum::debug_handler]
pub(crate) async fn get_checkin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetCheckinRes>, ApiError> {
    let id = CheckinId::parse(&id).map_err(telecare_core::CheckinError::from)?;

    match state.store.get(&id)? {
        Some(checkin) => Ok(Json(GetCheckinRes {
            success: true,
            entry: checkin.into(),
        })),
        None => Err(ApiError::NotFound(format!("check-in {} not found", id))),
    }
}
