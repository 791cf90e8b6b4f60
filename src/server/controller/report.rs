use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{TeacherAssessmentQueryDto, TeacherAssessmentRowDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::report::TeacherReportFilter,
        service::report::ReportService, state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Assessment progress of assistant teachers.
///
/// One row per assistant teacher matching the filters, ordered by province then
/// name. Each row carries the latest competency assessment and its average score,
/// the latest mentoring visit, activity counts and the date of the last activity.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `params` - Optional school, province, region, cohort and status filters
#[utoipa::path(
    get,
    path = "/api/reports/teacher-assessment",
    tag = REPORT_TAG,
    params(TeacherAssessmentQueryDto),
    responses(
        (status = 200, description = "Successfully built report", body = Vec<TeacherAssessmentRowDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_assessment(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeacherAssessmentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = ReportService::new(&state.db)
        .teacher_assessment(TeacherReportFilter::from_dto(params))
        .await?;
    let rows: Vec<TeacherAssessmentRowDto> = rows.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rows)))
}
