use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::IndicatorAspect;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        indicator::{
            CodeValidationDto, IndicatorDto, IndicatorListDto, IndicatorQueryDto,
            SubIndicatorDetailDto, SubIndicatorListDto, SubIndicatorQueryDto,
            ValidateCodesQueryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::indicator::{into_list_dto, into_sub_list_dto, IndicatorCodes},
        service::indicator::IndicatorService,
        state::AppState,
    },
};

/// Tag for grouping indicator catalog endpoints in OpenAPI documentation
pub static INDICATOR_TAG: &str = "indicator";

/// List the active indicator catalog in assessment order.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators",
    tag = INDICATOR_TAG,
    params(IndicatorQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved indicators", body = IndicatorListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_indicators(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<IndicatorQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let indicators = IndicatorService::new(&state.db)
        .get_all(params.include_sub)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(indicators))))
}

/// Get one indicator by code.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators/{code}",
    tag = INDICATOR_TAG,
    params(
        ("code" = String, Path, description = "Indicator code, such as PRO_1.1"),
        IndicatorQueryDto
    ),
    responses(
        (status = 200, description = "Successfully retrieved indicator", body = IndicatorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Indicator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_indicator(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
    Query(params): Query<IndicatorQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let indicator = IndicatorService::new(&state.db)
        .get_by_code(&code, params.include_sub)
        .await?;

    Ok((StatusCode::OK, Json(indicator.into_dto())))
}

/// List active sub-indicators with their parent, optionally for one indicator.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators/sub-indicators",
    tag = INDICATOR_TAG,
    params(SubIndicatorQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved sub-indicators", body = SubIndicatorListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sub_indicators(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SubIndicatorQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subs = IndicatorService::new(&state.db)
        .get_sub_indicators(params.indicator_code.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(into_sub_list_dto(subs))))
}

#[utoipa::path(
    get,
    path = "/api/indicators/sub-indicators/{code}",
    tag = INDICATOR_TAG,
    params(("code" = String, Path, description = "Sub-indicator code")),
    responses(
        (status = 200, description = "Successfully retrieved sub-indicator", body = SubIndicatorDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Sub-indicator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sub_indicator(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let sub = IndicatorService::new(&state.db)
        .get_sub_indicator(&code)
        .await?;

    Ok((StatusCode::OK, Json(sub.into_dto())))
}

/// List the indicators of one aspect with their sub-indicators.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators/aspect/{aspect}",
    tag = INDICATOR_TAG,
    params(("aspect" = IndicatorAspect, Path, description = "PROFESSIONAL, SOCIAL or PERSONAL")),
    responses(
        (status = 200, description = "Successfully retrieved indicators", body = IndicatorListDto),
        (status = 400, description = "Unknown aspect", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_indicators_by_aspect(
    State(state): State<AppState>,
    session: Session,
    Path(aspect): Path<IndicatorAspect>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let indicators = IndicatorService::new(&state.db)
        .get_by_aspect(aspect)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(indicators))))
}

/// List the indicators of one catalog section, such as `LEARNING_MANAGEMENT`.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators/category/{category}",
    tag = INDICATOR_TAG,
    params(("category" = String, Path, description = "Catalog section")),
    responses(
        (status = 200, description = "Successfully retrieved indicators", body = IndicatorListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_indicators_by_category(
    State(state): State<AppState>,
    session: Session,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let indicators = IndicatorService::new(&state.db)
        .get_by_section(&category.to_uppercase())
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(indicators))))
}

/// Check comma separated indicator and sub-indicator codes against the catalog.
///
/// Unknown codes are reported in the body, not as an error status.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/indicators/validate",
    tag = INDICATOR_TAG,
    params(ValidateCodesQueryDto),
    responses(
        (status = 200, description = "Validation result", body = CodeValidationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_codes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ValidateCodesQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let validation = IndicatorService::new(&state.db)
        .validate(&IndicatorCodes::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(validation.into_dto())))
}
