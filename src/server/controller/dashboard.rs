use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DashboardStatsDto, TeacherOverviewDto, TrendsDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Program totals, teacher breakdowns by region and status, and recent activity.
///
/// Responses are cached for 30 seconds.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = DashboardService::new(&state.db, &state.dashboard_cache)
        .stats()
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Every teacher with school, region, status and activity counts.
#[utoipa::path(
    get,
    path = "/api/dashboard/teachers",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teacher overview", body = Vec<TeacherOverviewDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teachers = DashboardService::new(&state.db, &state.dashboard_cache)
        .teachers()
        .await?;

    Ok((StatusCode::OK, Json(teachers)))
}

/// Monthly visit, journal and PLC counts for the last six months.
#[utoipa::path(
    get,
    path = "/api/dashboard/trends",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved trends", body = TrendsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trends(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let trends = DashboardService::new(&state.db, &state.dashboard_cache)
        .trends()
        .await?;

    Ok((StatusCode::OK, Json(trends)))
}
