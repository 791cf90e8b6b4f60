use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::EvidenceType;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        evidence::{
            CreateVideoLinkDto, EvidenceDto, EvidenceFilterDto, EvidenceLimitDto,
            EvidenceStatsDto, UploadEvidenceForm, VerifyEvidenceDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::evidence::{
            split_indicator_codes, EvidenceFilter, UploadedFile, VerifyEvidenceParam,
        },
        service::evidence::EvidenceService,
        state::AppState,
        util::file::{content_type, is_safe_filename},
    },
};

/// Tag for grouping evidence portfolio endpoints in OpenAPI documentation
pub static EVIDENCE_TAG: &str = "evidence";

/// Upload a file to a teacher's evidence portfolio.
///
/// Reads the multipart fields `file`, `evidence_type`, `indicator_codes` (comma
/// separated) and `teacher_id`. The file is stored under a generated name in the
/// upload directory. When `evidence_type` is absent it is inferred from the file name.
///
/// # Access Control
/// - `Uploader` - Teachers, admins and project managers
/// - Teachers always upload to their own portfolio; admins and project managers must
///   name the teacher
///
/// # Returns
/// - `201 Created` - The stored evidence item
/// - `400 Bad Request` - Missing file, disallowed extension, unknown indicator code, or
///   unresolved teacher
/// - `404 Not Found` - Teacher does not exist
/// - `413 Payload Too Large` - Body exceeds the upload limit
#[utoipa::path(
    post,
    path = "/api/evidence/upload",
    tag = EVIDENCE_TAG,
    request_body(content = UploadEvidenceForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded evidence", body = EvidenceDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role may not upload evidence", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_evidence(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Uploader])
        .await?;

    let mut file: Option<UploadedFile> = None;
    let mut evidence_type: Option<EvidenceType> = None;
    let mut indicator_codes: Vec<String> = Vec::new();
    let mut teacher_id: Option<i32> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let field_content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(bad_multipart)?;

                file = Some(UploadedFile {
                    filename,
                    content_type: field_content_type,
                    data: data.to_vec(),
                });
            }
            Some("evidence_type") => {
                let value = field.text().await.map_err(bad_multipart)?;
                evidence_type = parse_evidence_type(&value)?;
            }
            Some("indicator_codes") => {
                let value = field.text().await.map_err(bad_multipart)?;
                indicator_codes = split_indicator_codes(&value);
            }
            Some("teacher_id") => {
                let value = field.text().await.map_err(bad_multipart)?;
                teacher_id = parse_teacher_id(&value)?;
            }
            _ => {}
        }
    }

    let Some(file) = file.filter(|f| !f.filename.is_empty()) else {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    };

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .upload(&user, teacher_id, evidence_type, indicator_codes, file)
        .await?;

    Ok((StatusCode::CREATED, Json(evidence.into_dto())))
}

/// Add a video link to a teacher's evidence portfolio.
///
/// The URL must be http or https. When `video_platform` is absent it is detected
/// from the host.
///
/// # Access Control
/// - `Uploader` - Teachers, admins and project managers
#[utoipa::path(
    post,
    path = "/api/evidence/video-link",
    tag = EVIDENCE_TAG,
    request_body = CreateVideoLinkDto,
    responses(
        (status = 201, description = "Successfully added video link", body = EvidenceDto),
        (status = 400, description = "Invalid URL, unknown indicator code or unresolved teacher", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Role may not upload evidence", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_video_link(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVideoLinkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Uploader])
        .await?;

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .create_video_link(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(evidence.into_dto())))
}

/// Get a teacher's evidence portfolio, newest first.
///
/// # Access Control
/// - Any authenticated user; teachers may only read their own portfolio
#[utoipa::path(
    get,
    path = "/api/evidence/teacher/{teacher_id}",
    tag = EVIDENCE_TAG,
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID"),
        EvidenceFilterDto
    ),
    responses(
        (status = 200, description = "Successfully retrieved evidence", body = Vec<EvidenceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Teacher reading another portfolio", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(teacher_id): Path<i32>,
    Query(params): Query<EvidenceFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .get_by_teacher(&user, teacher_id, EvidenceFilter::from_dto(params))
        .await?;
    let evidence: Vec<EvidenceDto> = evidence.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(evidence)))
}

/// Get the latest evidence items across all teachers.
///
/// # Access Control
/// - `Reviewer` - Admins, project managers and mentors
#[utoipa::path(
    get,
    path = "/api/evidence",
    tag = EVIDENCE_TAG,
    params(EvidenceLimitDto),
    responses(
        (status = 200, description = "Successfully retrieved evidence", body = Vec<EvidenceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a reviewer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_evidence(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<EvidenceLimitDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Reviewer])
        .await?;

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .get_latest(params.limit)
        .await?;
    let evidence: Vec<EvidenceDto> = evidence.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(evidence)))
}

#[utoipa::path(
    get,
    path = "/api/evidence/{id}",
    tag = EVIDENCE_TAG,
    params(
        ("id" = i32, Path, description = "Evidence ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved evidence", body = EvidenceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Evidence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(evidence.into_dto())))
}

/// Mark an evidence item as verified.
///
/// Optionally replaces its indicator codes and evidence type.
///
/// # Access Control
/// - `Reviewer` - Admins, project managers and mentors
#[utoipa::path(
    patch,
    path = "/api/evidence/{id}/verify",
    tag = EVIDENCE_TAG,
    params(
        ("id" = i32, Path, description = "Evidence ID")
    ),
    request_body = VerifyEvidenceDto,
    responses(
        (status = 200, description = "Successfully verified evidence", body = EvidenceDto),
        (status = 400, description = "Unknown indicator code", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a reviewer", body = ErrorDto),
        (status = 404, description = "Evidence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyEvidenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Reviewer])
        .await?;

    let evidence = EvidenceService::new(&state.db, &state.upload_dir)
        .verify(VerifyEvidenceParam::from_dto(id, user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(evidence.into_dto())))
}

/// Delete an evidence item and its stored file.
///
/// A failure to remove the file from disk is logged and does not fail the request.
///
/// # Access Control
/// - `EvidenceDeleter` - Teachers (own items only) and admins
#[utoipa::path(
    delete,
    path = "/api/evidence/{id}",
    tag = EVIDENCE_TAG,
    params(
        ("id" = i32, Path, description = "Evidence ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted evidence"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this item", body = ErrorDto),
        (status = 404, description = "Evidence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EvidenceDeleter])
        .await?;

    EvidenceService::new(&state.db, &state.upload_dir)
        .delete(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Portfolio totals with counts per evidence type and per indicator code.
///
/// # Access Control
/// - `Reviewer` - Admins, project managers and mentors
#[utoipa::path(
    get,
    path = "/api/evidence/stats/summary",
    tag = EVIDENCE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved statistics", body = EvidenceStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a reviewer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evidence_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Reviewer])
        .await?;

    let stats = EvidenceService::new(&state.db, &state.upload_dir)
        .stats()
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Serve a stored evidence file.
///
/// Names containing a path separator or `..` are rejected as not found.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/uploads/{filename}",
    tag = EVIDENCE_TAG,
    params(
        ("filename" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_safe_filename(&filename) {
        return Err(file_not_found());
    }

    let data = match tokio::fs::read(state.upload_dir.join(&filename)).await {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(file_not_found()),
        Err(err) => return Err(err.into()),
    };

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type(&filename)),
            (header::CACHE_CONTROL, "public, max-age=3600, immutable"),
            (
                header::HeaderName::from_static("cross-origin-resource-policy"),
                "cross-origin",
            ),
        ],
        data,
    ))
}

fn file_not_found() -> AppError {
    AppError::NotFound("File not found".to_string())
}

fn bad_multipart(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge("File exceeds the upload size limit".to_string());
    }

    AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}

/// Parses an optional `evidence_type` form field; blank means absent.
fn parse_evidence_type(value: &str) -> Result<Option<EvidenceType>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid evidence_type: {}", value)))
}

/// Parses an optional `teacher_id` form field; blank means absent.
fn parse_teacher_id(value: &str) -> Result<Option<i32>, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid teacher_id: {}", value)))
}
