use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        completeness::{PassThresholdDto, RoundQueryDto, TeacherCompletenessDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::completeness::{clamp_round, PassThreshold},
        service::completeness::CompletenessService,
        state::AppState,
    },
};

/// Tag for grouping evidence completeness endpoints in OpenAPI documentation
pub static COMPLETENESS_TAG: &str = "completeness";

/// Score a teacher's evidence against the indicator catalog for one round.
///
/// # Access Control
/// - Any authenticated user; teachers may only score themselves
///
/// # Returns
/// - `200 OK` - Scores per indicator and aspect, with the round's pass criteria
/// - `403 Forbidden` - Teacher asking for another teacher
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    get,
    path = "/api/completeness/teacher/{teacher_id}",
    tag = COMPLETENESS_TAG,
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID"),
        RoundQueryDto
    ),
    responses(
        (status = 200, description = "Successfully scored teacher", body = TeacherCompletenessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Teacher reading another teacher", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_completeness(
    State(state): State<AppState>,
    session: Session,
    Path(teacher_id): Path<i32>,
    Query(params): Query<RoundQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completeness = CompletenessService::new(&state.db)
        .for_teacher(&user, teacher_id, clamp_round(params.round))
        .await?;

    Ok((StatusCode::OK, Json(completeness.into_dto())))
}

/// Score the caller's own teacher record.
#[utoipa::path(
    get,
    path = "/api/completeness/me",
    tag = COMPLETENESS_TAG,
    params(RoundQueryDto),
    responses(
        (status = 200, description = "Successfully scored caller", body = TeacherCompletenessDto),
        (status = 400, description = "Account has no teacher profile", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_completeness(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RoundQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let completeness = CompletenessService::new(&state.db)
        .for_caller(&user, clamp_round(params.round))
        .await?;

    Ok((StatusCode::OK, Json(completeness.into_dto())))
}

/// Pass thresholds per round span.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/completeness/criteria",
    tag = COMPLETENESS_TAG,
    responses(
        (status = 200, description = "Pass thresholds", body = Vec<PassThresholdDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_pass_criteria(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let thresholds: Vec<PassThresholdDto> = CompletenessService::pass_thresholds()
        .into_iter()
        .map(PassThreshold::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(thresholds)))
}
