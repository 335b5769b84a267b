use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{HealthResponse, InfoResponse};
use crate::state::AppState;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "System"
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Project name, description and version
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Project metadata", body = InfoResponse)
    ),
    tag = "System"
)]
#[instrument(skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let settings = &state.settings;
    Json(InfoResponse {
        name: settings.project_name.clone(),
        description: settings.project_description.clone(),
        version: settings.project_version.clone(),
    })
}
