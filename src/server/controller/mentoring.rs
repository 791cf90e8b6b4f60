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
        mentoring::{
            CreateMentoringVisitDto, MentoringQueryDto, MentoringVisitDto,
            PaginatedMentoringVisitsDto, UpdateMentoringVisitDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::mentoring::{
            CreateMentoringVisitParam, MentoringFilter, UpdateMentoringVisitParam,
        },
        service::mentoring::MentoringService,
        state::AppState,
    },
};

/// Tag for grouping mentoring endpoints in OpenAPI documentation
pub static MENTORING_TAG: &str = "mentoring";

/// Get paginated mentoring visits, latest visit date first.
///
/// # Arguments
/// - `params` - Optional teacher, visit type and inclusive date range filters plus
///   pagination
///
/// # Returns
/// - `200 OK` - Paginated visits, each with a teacher summary
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/mentoring",
    tag = MENTORING_TAG,
    params(MentoringQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved visits", body = PaginatedMentoringVisitsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visits(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MentoringQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let visits = MentoringService::new(&state.db)
        .get_paginated(MentoringFilter::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(visits.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/mentoring/{id}",
    tag = MENTORING_TAG,
    params(
        ("id" = i32, Path, description = "Mentoring visit ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visit", body = MentoringVisitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Mentoring visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let visit = MentoringService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(visit.into_dto())))
}

/// Record a mentoring visit.
///
/// # Returns
/// - `201 Created` - The new visit
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    post,
    path = "/api/mentoring",
    tag = MENTORING_TAG,
    request_body = CreateMentoringVisitDto,
    responses(
        (status = 201, description = "Successfully created visit", body = MentoringVisitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMentoringVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let visit = MentoringService::new(&state.db)
        .create(CreateMentoringVisitParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(visit.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/mentoring/{id}",
    tag = MENTORING_TAG,
    params(
        ("id" = i32, Path, description = "Mentoring visit ID")
    ),
    request_body = UpdateMentoringVisitDto,
    responses(
        (status = 200, description = "Successfully updated visit", body = MentoringVisitDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Mentoring visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_visit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMentoringVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let visit = MentoringService::new(&state.db)
        .update(UpdateMentoringVisitParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(visit.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/mentoring/{id}",
    tag = MENTORING_TAG,
    params(
        ("id" = i32, Path, description = "Mentoring visit ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted visit"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Mentoring visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    MentoringService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
