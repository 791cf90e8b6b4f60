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
        assessment::{
            CompetencyAssessmentDto, CreateCompetencyAssessmentDto, CreateDevelopmentPlanDto,
            DevelopmentPlanDto, UpdateCompetencyAssessmentDto, UpdateDevelopmentPlanDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::assessment::{
            CreateCompetencyAssessmentParam, CreateDevelopmentPlanParam,
            UpdateCompetencyAssessmentParam, UpdateDevelopmentPlanParam,
        },
        service::assessment::AssessmentService,
        state::AppState,
    },
};

/// Tag for grouping assessment endpoints in OpenAPI documentation
pub static ASSESSMENT_TAG: &str = "assessment";

/// Get competency assessments, newest first.
///
/// # Arguments
/// - `params` - Optional `teacher_id` restricting the list to one teacher
///
/// # Returns
/// - `200 OK` - Assessments, each with a teacher summary
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/assessment/competency",
    tag = ASSESSMENT_TAG,
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved assessments", body = Vec<CompetencyAssessmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competencies(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeacherFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assessments = AssessmentService::new(&state.db)
        .get_competencies(params.teacher_id)
        .await?;
    let assessments: Vec<CompetencyAssessmentDto> =
        assessments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(assessments)))
}

#[utoipa::path(
    get,
    path = "/api/assessment/competency/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Assessment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved assessment", body = CompetencyAssessmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competency(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assessment = AssessmentService::new(&state.db).get_competency(id).await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

/// Record a competency assessment.
///
/// # Returns
/// - `201 Created` - The new assessment
/// - `400 Bad Request` - A score is outside 1 to 5
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    post,
    path = "/api/assessment/competency",
    tag = ASSESSMENT_TAG,
    request_body = CreateCompetencyAssessmentDto,
    responses(
        (status = 201, description = "Successfully created assessment", body = CompetencyAssessmentDto),
        (status = 400, description = "Score out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_competency(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCompetencyAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateCompetencyAssessmentParam::from_dto(payload)?;
    let assessment = AssessmentService::new(&state.db)
        .create_competency(param)
        .await?;

    Ok((StatusCode::CREATED, Json(assessment.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/assessment/competency/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Assessment ID")
    ),
    request_body = UpdateCompetencyAssessmentDto,
    responses(
        (status = 200, description = "Successfully updated assessment", body = CompetencyAssessmentDto),
        (status = 400, description = "Score out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_competency(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompetencyAssessmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateCompetencyAssessmentParam::from_dto(id, payload)?;
    let assessment = AssessmentService::new(&state.db)
        .update_competency(param)
        .await?;

    Ok((StatusCode::OK, Json(assessment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/assessment/competency/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Assessment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted assessment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Assessment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_competency(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AssessmentService::new(&state.db)
        .delete_competency(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get development plans, newest first.
#[utoipa::path(
    get,
    path = "/api/assessment/plans",
    tag = ASSESSMENT_TAG,
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "Successfully retrieved plans", body = Vec<DevelopmentPlanDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeacherFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let plans = AssessmentService::new(&state.db)
        .get_plans(params.teacher_id)
        .await?;
    let plans: Vec<DevelopmentPlanDto> = plans.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(plans)))
}

#[utoipa::path(
    get,
    path = "/api/assessment/plans/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Development plan ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved plan", body = DevelopmentPlanDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Development plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let plan = AssessmentService::new(&state.db).get_plan(id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Create a development plan.
///
/// # Returns
/// - `201 Created` - The new plan
/// - `400 Bad Request` - End date is before start date
/// - `404 Not Found` - Teacher does not exist
#[utoipa::path(
    post,
    path = "/api/assessment/plans",
    tag = ASSESSMENT_TAG,
    request_body = CreateDevelopmentPlanDto,
    responses(
        (status = 201, description = "Successfully created plan", body = DevelopmentPlanDto),
        (status = 400, description = "End date before start date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDevelopmentPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateDevelopmentPlanParam::from_dto(payload)?;
    let plan = AssessmentService::new(&state.db).create_plan(param).await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

/// Update a development plan.
///
/// The date range is checked against the stored dates when only one side changes.
#[utoipa::path(
    put,
    path = "/api/assessment/plans/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Development plan ID")
    ),
    request_body = UpdateDevelopmentPlanDto,
    responses(
        (status = 200, description = "Successfully updated plan", body = DevelopmentPlanDto),
        (status = 400, description = "End date before start date", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Development plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDevelopmentPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let plan = AssessmentService::new(&state.db)
        .update_plan(UpdateDevelopmentPlanParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/assessment/plans/{id}",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Development plan ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted plan"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Development plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AssessmentService::new(&state.db).delete_plan(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
