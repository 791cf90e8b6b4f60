use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, TeacherFilterParams},
        journal::{CreateJournalDto, JournalDto, UpdateJournalDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::journal::{CreateJournalParam, UpdateJournalParam},
        service::journal::JournalService,
        state::AppState,
    },
};

/// Tag for grouping reflective journal endpoints in OpenAPI documentation
pub static JOURNAL_TAG: &str = "journal";

/// Get reflective journals, latest month first.
#[utoipa::path(
    get,
    path = "/api/journals",
    tag = JOURNAL_TAG,
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved journals", body = Vec<JournalDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_journals(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeacherFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let journals = JournalService::new(&state.db)
        .get_all(params.teacher_id)
        .await?;
    let journals: Vec<JournalDto> = journals.into_iter().map(|j| j.into_dto()).collect();

    Ok((StatusCode::OK, Json(journals)))
}

#[utoipa::path(
    get,
    path = "/api/journals/{id}",
    tag = JOURNAL_TAG,
    params(
        ("id" = i32, Path, description = "Journal ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved journal", body = JournalDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Journal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_journal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let journal = JournalService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(journal.into_dto())))
}

/// Write a monthly reflective journal.
///
/// A teacher has at most one journal per month.
///
/// # Returns
/// - `201 Created` - The new journal
/// - `400 Bad Request` - Month is not `YYYY-MM`
/// - `404 Not Found` - Teacher does not exist
/// - `409 Conflict` - The teacher already has a journal for that month
#[utoipa::path(
    post,
    path = "/api/journals",
    tag = JOURNAL_TAG,
    request_body = CreateJournalDto,
    responses(
        (status = 201, description = "Successfully created journal", body = JournalDto),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 409, description = "Journal for this month already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_journal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateJournalDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateJournalParam::from_dto(payload)?;
    let journal = JournalService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(journal.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/journals/{id}",
    tag = JOURNAL_TAG,
    params(
        ("id" = i32, Path, description = "Journal ID")
    ),
    request_body = UpdateJournalDto,
    responses(
        (status = 200, description = "Successfully updated journal", body = JournalDto),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Journal not found", body = ErrorDto),
        (status = 409, description = "Journal for this month already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_journal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJournalDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateJournalParam::from_dto(id, payload)?;
    let journal = JournalService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(journal.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/journals/{id}",
    tag = JOURNAL_TAG,
    params(
        ("id" = i32, Path, description = "Journal ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted journal"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Journal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_journal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    JournalService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
