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
        teacher::{
            CreateTeacherDto, PaginatedTeachersDto, TeacherDetailDto, TeacherDto,
            TeacherQueryDto, TeacherStatisticsDto, UpdateTeacherDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::teacher::{CreateTeacherParam, TeacherFilter, UpdateTeacherParam},
        service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// Get paginated teachers, newest first.
///
/// `search` matches full name, citizen id or email. `region` and `province` are
/// matched through the teacher's school.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Paginated teachers, each with a school summary
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    params(TeacherQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = PaginatedTeachersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeacherQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teachers = TeacherService::new(&state.db)
        .get_paginated(TeacherFilter::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(teachers.into_dto())))
}

/// Get a teacher with school and recent activity.
///
/// # Returns
/// - `200 OK` - Teacher with school, latest visits, assessments, journals, PLC
///   sessions and development plans
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = TeacherService::new(&state.db).get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get activity counts and the latest competency assessment for a teacher.
#[utoipa::path(
    get,
    path = "/api/teachers/{id}/statistics",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = TeacherStatisticsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_statistics(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let statistics = TeacherService::new(&state.db).get_statistics(id).await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Create a teacher.
///
/// # Returns
/// - `201 Created` - The new teacher
/// - `400 Bad Request` - Citizen id is not 13 digits or email is malformed
/// - `404 Not Found` - School does not exist
/// - `409 Conflict` - Citizen id or email already registered
#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 400, description = "Invalid citizen id or email", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 409, description = "Citizen id or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teacher = TeacherService::new(&state.db)
        .create(CreateTeacherParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Update a teacher. Only fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Invalid citizen id or email", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher or school not found", body = ErrorDto),
        (status = 409, description = "Citizen id or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let teacher = TeacherService::new(&state.db)
        .update(UpdateTeacherParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Delete a teacher and every activity recorded for them.
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted teacher"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    TeacherService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
