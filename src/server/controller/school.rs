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
        school::{
            CreateSchoolDto, PaginatedSchoolsDto, SchoolDetailDto, SchoolDto, SchoolQueryDto,
            UpdateSchoolDto,
        },
        teacher::TeacherDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::school::{CreateSchoolParam, SchoolFilter, UpdateSchoolParam},
        service::school::SchoolService,
        state::AppState,
    },
};

/// Tag for grouping school endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

/// Get paginated schools.
///
/// Supports a free-text `search` over school name, province and director name, plus
/// exact filters on region, province, size and area type. Results are ordered by
/// school name and each item carries the number of teachers placed there.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Paginated list of schools
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    params(SchoolQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved schools", body = PaginatedSchoolsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schools(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SchoolQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let schools = SchoolService::new(&state.db)
        .get_paginated(SchoolFilter::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(schools.into_dto())))
}

/// Get a school with its teachers.
#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = SchoolService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get the teachers placed at a school, ordered by name.
#[utoipa::path(
    get,
    path = "/api/schools/{id}/teachers",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = Vec<TeacherDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school_teachers(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teachers = SchoolService::new(&state.db).get_teachers(id).await?;
    let teachers: Vec<TeacherDto> = teachers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(teachers)))
}

/// Create a school.
///
/// # Returns
/// - `201 Created` - The new school
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "Successfully created school", body = SchoolDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_school(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let school = SchoolService::new(&state.db)
        .create(CreateSchoolParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

/// Update a school. Only fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    request_body = UpdateSchoolDto,
    responses(
        (status = 200, description = "Successfully updated school", body = SchoolDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_school(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let school = SchoolService::new(&state.db)
        .update(UpdateSchoolParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

/// Delete a school together with its teachers.
#[utoipa::path(
    delete,
    path = "/api/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted school"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_school(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    SchoolService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
