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
        self_assessment::{
            CreateSelfAssessmentDto, ReviewSelfAssessmentDto, SelfAssessmentDto,
            SelfAssessmentQueryDto, UpdateSelfAssessmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::self_assessment::{
            CreateSelfAssessmentParam, SelfAssessmentFilter, UpdateSelfAssessmentParam,
        },
        service::self_assessment::SelfAssessmentService,
        state::AppState,
    },
};

/// Tag for grouping self-assessment endpoints in OpenAPI documentation
pub static SELF_ASSESSMENT_TAG: &str = "self-assessment";

/// Create a draft self-assessment.
///
/// The assessment belongs to the body `teacher_id` when given, otherwise to the
/// caller's linked teacher. Portfolio items listed in `portfolio_item_ids` are linked
/// when they belong to that same teacher; others are skipped.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The draft with its linked portfolio items
/// - `400 Bad Request` - No teacher could be resolved or a score is out of range
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    post,
    path = "/api/self-assessment",
    tag = SELF_ASSESSMENT_TAG,
    request_body = CreateSelfAssessmentDto,
    responses(
        (status = 201, description = "Successfully created self-assessment", body = SelfAssessmentDto),
        (status = 400, description = "No teacher profile or invalid score", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSelfAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateSelfAssessmentParam::from_dto(payload)?;
    let assessment = SelfAssessmentService::new(&state.db)
        .create(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(assessment.into_dto())))
}

/// Get self-assessments, newest first.
///
/// Teachers always see their own. Managers and reviewers may pass `teacher_id` to
/// look at another teacher.
#[utoipa::path(
    get,
    path = "/api/self-assessment",
    tag = SELF_ASSESSMENT_TAG,
    params(SelfAssessmentQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved self-assessments", body = Vec<SelfAssessmentDto>),
        (status = 400, description = "Caller has no teacher profile", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_self_assessments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SelfAssessmentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assessments = SelfAssessmentService::new(&state.db)
        .get_all(&user, SelfAssessmentFilter::from_dto(params))
        .await?;
    let assessments: Vec<SelfAssessmentDto> =
        assessments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(assessments)))
}

#[utoipa::path(
    get,
    path = "/api/self-assessment/{id}",
    tag = SELF_ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Self-assessment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved self-assessment", body = SelfAssessmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Self-assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assessment = SelfAssessmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Update an owned self-assessment that has not been submitted.
///
/// When `portfolio_item_ids` is present the previous links are dropped and the new
/// set is linked.
///
/// # Access Control
/// - The teacher who owns the assessment
///
/// # Returns
/// - `200 OK` - The updated assessment
/// - `403 Forbidden` - Not the owner, or already submitted
/// - `404 Not Found` - Self-assessment does not exist
#[utoipa::path(
    put,
    path = "/api/self-assessment/{id}",
    tag = SELF_ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Self-assessment ID")
    ),
    request_body = UpdateSelfAssessmentDto,
    responses(
        (status = 200, description = "Successfully updated self-assessment", body = SelfAssessmentDto),
        (status = 400, description = "Score out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or already submitted", body = ErrorDto),
        (status = 404, description = "Self-assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSelfAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateSelfAssessmentParam::from_dto(id, payload)?;
    let assessment = SelfAssessmentService::new(&state.db)
        .update(&user, param)
        .await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Submit an owned draft for review.
#[utoipa::path(
    patch,
    path = "/api/self-assessment/{id}/submit",
    tag = SELF_ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Self-assessment ID")
    ),
    responses(
        (status = 200, description = "Successfully submitted self-assessment", body = SelfAssessmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or not a draft", body = ErrorDto),
        (status = 404, description = "Self-assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assessment = SelfAssessmentService::new(&state.db)
        .submit(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Review a submitted self-assessment.
///
/// # Access Control
/// - `Reviewer` - Admins, project managers and mentors
#[utoipa::path(
    patch,
    path = "/api/self-assessment/{id}/review",
    tag = SELF_ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Self-assessment ID")
    ),
    request_body = ReviewSelfAssessmentDto,
    responses(
        (status = 200, description = "Successfully reviewed self-assessment", body = SelfAssessmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a reviewer or not submitted", body = ErrorDto),
        (status = 404, description = "Self-assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewSelfAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Reviewer])
        .await?;

    let assessment = SelfAssessmentService::new(&state.db)
        .review(&user, id, payload.reviewer_comments)
        .await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Delete an owned self-assessment that has not been reviewed.
///
/// Linked portfolio items are kept and unlinked.
#[utoipa::path(
    delete,
    path = "/api/self-assessment/{id}",
    tag = SELF_ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Self-assessment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted self-assessment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or already reviewed", body = ErrorDto),
        (status = 404, description = "Self-assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_self_assessment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    SelfAssessmentService::new(&state.db)
        .delete(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
