use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::ConsentType;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pdpa::{
            CleanupQueryDto, ConsentCheckDto, ConsentDto, ConsentSummaryDto, DeleteMyDataDto,
            DeleteMyDataResultDto, ExportDto, ExportQueryDto, GrantConsentDto, MyDataDto,
            RetentionCleanupDto, RetentionCountsDto, RetentionStatsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::pdpa::{DeleteMyDataParam, GrantConsentParam},
        service::{consent::ConsentService, pdpa::PdpaService, retention::RetentionService},
        state::AppState,
        util::request::{client_ip, user_agent},
    },
};

/// Tag for grouping personal data protection endpoints in OpenAPI documentation
pub static PDPA_TAG: &str = "pdpa";

/// Get the caller's consent records, newest first.
///
/// Granted consents past their expiry are marked EXPIRED before they are returned.
#[utoipa::path(
    get,
    path = "/api/pdpa/consents",
    tag = PDPA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved consents", body = Vec<ConsentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_consents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let consents = ConsentService::new(&state.db).get_consents(user.id).await?;
    let consents: Vec<ConsentDto> = consents.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(consents)))
}

/// Count the caller's consents by status and report the required consent statuses.
///
/// Required types with no record are reported as PENDING.
#[utoipa::path(
    get,
    path = "/api/pdpa/consents/summary",
    tag = PDPA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved consent summary", body = ConsentSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_consent_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = ConsentService::new(&state.db).summary(user.id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Grant a consent, or re-grant one that was revoked or expired.
///
/// Records the client IP (first `X-Forwarded-For` hop, else the peer address) and
/// the `User-Agent` header alongside the grant.
///
/// # Returns
/// - `201 Created` - The granted consent
/// - `400 Bad Request` - `expires_in_days` below 1
#[utoipa::path(
    post,
    path = "/api/pdpa/consents",
    tag = PDPA_TAG,
    request_body = GrantConsentDto,
    responses(
        (status = 201, description = "Successfully granted consent", body = ConsentDto),
        (status = 400, description = "Invalid expiry", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn grant_consent(
    State(state): State<AppState>,
    session: Session,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<GrantConsentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = GrantConsentParam::from_dto(
        user.id,
        payload,
        client_ip(&headers, peer),
        user_agent(&headers),
    )?;
    let consent = ConsentService::new(&state.db).grant(param).await?;

    Ok((StatusCode::CREATED, Json(consent.into_dto())))
}

/// Revoke one of the caller's consents.
///
/// # Returns
/// - `200 OK` - The revoked consent
/// - `400 Bad Request` - Consent already revoked
/// - `404 Not Found` - No consent of this type was ever recorded
#[utoipa::path(
    delete,
    path = "/api/pdpa/consents/{consent_type}",
    tag = PDPA_TAG,
    params(
        ("consent_type" = ConsentType, Path, description = "Consent type")
    ),
    responses(
        (status = 200, description = "Successfully revoked consent", body = ConsentDto),
        (status = 400, description = "Consent already revoked", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Consent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_consent(
    State(state): State<AppState>,
    session: Session,
    Path(consent_type): Path<ConsentType>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let consent = ConsentService::new(&state.db)
        .revoke(user.id, consent_type)
        .await?;

    Ok((StatusCode::OK, Json(consent.into_dto())))
}

/// Whether the caller currently holds a granted, unexpired consent of this type.
#[utoipa::path(
    get,
    path = "/api/pdpa/consents/{consent_type}/check",
    tag = PDPA_TAG,
    params(
        ("consent_type" = ConsentType, Path, description = "Consent type")
    ),
    responses(
        (status = 200, description = "Successfully checked consent", body = ConsentCheckDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_consent(
    State(state): State<AppState>,
    session: Session,
    Path(consent_type): Path<ConsentType>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let has_consent = ConsentService::new(&state.db)
        .has_consent(user.id, consent_type)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ConsentCheckDto {
            consent_type,
            has_consent,
        }),
    ))
}

/// Right of access: everything stored about the caller.
///
/// The citizen id is masked. Activities cover the caller's linked teacher record.
#[utoipa::path(
    get,
    path = "/api/pdpa/my-data",
    tag = PDPA_TAG,
    responses(
        (status = 200, description = "Successfully collected personal data", body = MyDataDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_data(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let data = PdpaService::new(&state.db, &state.upload_dir)
        .my_data(user)
        .await?;

    Ok((StatusCode::OK, Json(data.into_dto())))
}

/// Right to data portability: the personal data document as JSON or CSV.
///
/// CSV content is a `key,value` table with nested keys joined by dots.
#[utoipa::path(
    get,
    path = "/api/pdpa/export-my-data",
    tag = PDPA_TAG,
    params(ExportQueryDto),
    responses(
        (status = 200, description = "Successfully exported personal data", body = ExportDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_my_data(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ExportQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let export = PdpaService::new(&state.db, &state.upload_dir)
        .export(user, params.format)
        .await?;

    Ok((StatusCode::OK, Json(export)))
}

/// Right to erasure.
///
/// Exactly one mode applies, checked in this order:
/// - `anonymize` - Scrub identifying fields and deactivate the account
/// - `delete_all` - Remove the linked teacher with all activities, then the account
/// - `categories` - Remove the listed activity categories; unknown names are ignored
///
/// # Returns
/// - `200 OK` - What was done
/// - `400 Bad Request` - None of the three modes was requested
#[utoipa::path(
    delete,
    path = "/api/pdpa/my-data",
    tag = PDPA_TAG,
    request_body = DeleteMyDataDto,
    responses(
        (status = 200, description = "Successfully processed deletion request", body = DeleteMyDataResultDto),
        (status = 400, description = "No deletion mode given", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_my_data(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeleteMyDataDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = DeleteMyDataParam::from_dto(payload)?;
    let result = PdpaService::new(&state.db, &state.upload_dir)
        .delete_my_data(&user, param)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Row totals and near-expiry counts for each retained dataset.
///
/// # Access Control
/// - `Manager` - Admins and project managers
#[utoipa::path(
    get,
    path = "/api/pdpa/retention/stats",
    tag = PDPA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved retention statistics", body = RetentionStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_retention_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let stats = RetentionService::new(&state.db, &state.upload_dir)
        .stats()
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Rows within 30 days of their retention limit, per dataset.
///
/// # Access Control
/// - `Manager` - Admins and project managers
#[utoipa::path(
    get,
    path = "/api/pdpa/retention/expiring",
    tag = PDPA_TAG,
    responses(
        (status = 200, description = "Successfully retrieved expiring counts", body = RetentionCountsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expiring(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let counts = RetentionService::new(&state.db, &state.upload_dir)
        .expiring()
        .await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Delete rows past their retention period, or only count them with `dry_run`.
///
/// # Access Control
/// - `Manager` - Admins and project managers
#[utoipa::path(
    post,
    path = "/api/pdpa/retention/cleanup",
    tag = PDPA_TAG,
    params(CleanupQueryDto),
    responses(
        (status = 200, description = "Successfully ran retention cleanup", body = RetentionCleanupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_cleanup(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CleanupQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let counts = RetentionService::new(&state.db, &state.upload_dir)
        .cleanup(params.dry_run)
        .await?;

    tracing::info!(
        "User {} ran retention cleanup (dry run: {}), {} rows",
        user.id,
        params.dry_run,
        counts.total()
    );

    Ok((
        StatusCode::OK,
        Json(RetentionCleanupDto {
            dry_run: params.dry_run,
            counts: counts.into_dto(),
        }),
    ))
}
