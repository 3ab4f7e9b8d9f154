//! # API REST
//!
//! REST API implementation for telecare refill check-ins.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON rejection mapping, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `telecare-core` for everything else.

#![warn(rust_2018_idioms)]

mod checkins;
mod error;

pub use error::ApiError;

use api_shared::{
    CheckinEntry, ErrorRes, GetCheckinRes, HealthRes, HealthService, ListCheckinsRes,
    SubmitCheckinReq, SubmitCheckinRes, ValidationErrorRes,
};
use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use telecare_core::{CheckinService, CheckinStore, ServiceConfig};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone, Default)]
pub struct AppState {
    service: CheckinService,
    store: CheckinStore,
}

impl AppState {
    pub fn new(service: CheckinService, store: CheckinStore) -> Self {
        Self { service, store }
    }

    pub fn store(&self) -> &CheckinStore {
        &self.store
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        checkins::submit_checkin,
        checkins::list_checkins,
        checkins::get_checkin,
    ),
    components(schemas(
        HealthRes,
        SubmitCheckinReq,
        SubmitCheckinRes,
        CheckinEntry,
        GetCheckinRes,
        ListCheckinsRes,
        ValidationErrorRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI mounted at `/swagger-ui`.
///
/// No CORS layer is applied; see [`app`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/refill-checkins",
            get(checkins::list_checkins).post(checkins::submit_checkin),
        )
        .route("/refill-checkins/:id", get(checkins::get_checkin))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Builds the router and applies the layers `cfg` asks for.
pub fn app(state: AppState, cfg: &ServiceConfig) -> Router {
    let router = router(state);
    if cfg.cors_permissive() {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used by monitoring and load balancers.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}
