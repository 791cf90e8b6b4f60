use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::HealthDto,
    server::{service::health::HealthService, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness and database connectivity.
///
/// Always answers 200; a failed database ping shows up as `"degraded"`.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service status", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::new(&state.db, state.started_at).check().await;

    (StatusCode::OK, Json(health))
}
