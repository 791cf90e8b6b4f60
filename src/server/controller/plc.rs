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
        plc::{
            CreatePlcActivityDto, PaginatedPlcActivitiesDto, PlcActivityDto, PlcGroupCountDto,
            PlcQueryDto, UpdatePlcActivityDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::plc::{CreatePlcActivityParam, PlcFilter, UpdatePlcActivityParam},
        service::plc::PlcService,
        state::AppState,
    },
};

/// Tag for grouping PLC endpoints in OpenAPI documentation
pub static PLC_TAG: &str = "plc";

/// Get paginated PLC activities, latest session first.
#[utoipa::path(
    get,
    path = "/api/plc",
    tag = PLC_TAG,
    params(PlcQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved PLC activities", body = PaginatedPlcActivitiesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PlcQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let activities = PlcService::new(&state.db)
        .get_paginated(PlcFilter::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(activities.into_dto())))
}

/// Count PLC activities per level, ordered by level.
#[utoipa::path(
    get,
    path = "/api/plc/stats/groups",
    tag = PLC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved group counts", body = Vec<PlcGroupCountDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let groups = PlcService::new(&state.db).get_group_stats().await?;
    let groups: Vec<PlcGroupCountDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(groups)))
}

#[utoipa::path(
    get,
    path = "/api/plc/{id}",
    tag = PLC_TAG,
    params(
        ("id" = i32, Path, description = "PLC activity ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved PLC activity", body = PlcActivityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "PLC activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let activity = PlcService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/plc",
    tag = PLC_TAG,
    request_body = CreatePlcActivityDto,
    responses(
        (status = 201, description = "Successfully created PLC activity", body = PlcActivityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlcActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let activity = PlcService::new(&state.db)
        .create(CreatePlcActivityParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/plc/{id}",
    tag = PLC_TAG,
    params(
        ("id" = i32, Path, description = "PLC activity ID")
    ),
    request_body = UpdatePlcActivityDto,
    responses(
        (status = 200, description = "Successfully updated PLC activity", body = PlcActivityDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "PLC activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlcActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let activity = PlcService::new(&state.db)
        .update(UpdatePlcActivityParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/plc/{id}",
    tag = PLC_TAG,
    params(
        ("id" = i32, Path, description = "PLC activity ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted PLC activity"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "PLC activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PlcService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
