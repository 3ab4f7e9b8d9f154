use api_shared::{ErrorRes, ValidationErrorRes};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use telecare_core::{CheckinError, FieldError};

/// Failure of a REST request, mapped onto a status code and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// The body failed shape validation; `400` with `{ errors: [...] }`.
    Validation(Vec<FieldError>),
    BadRequest(String),
    NotFound(String),
    Internal(CheckinError),
}

impl From<CheckinError> for ApiError {
    fn from(err: CheckinError) -> Self {
        match err {
            CheckinError::InvalidId(e) => ApiError::BadRequest(e.to_string()),
            CheckinError::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorRes { errors })).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorRes::new(msg))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorRes::new(msg))).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Check-in request failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorRes::new("Internal error")),
                )
                    .into_response()
            }
        }
    }
}
