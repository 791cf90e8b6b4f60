//! E-portfolio evidence service.
//!
//! Handles file uploads and video links, the reviewer verification step, and
//! cleanup of stored files. Files live flat in the upload directory under a
//! generated `<uuid>.<ext>` name.

use std::path::Path;

use entity::sea_orm_active_enums::{EvidenceType, UserRole};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::evidence::CreateVideoLinkDto,
    server::{
        data::evidence::EvidenceRepository,
        error::AppError,
        model::{
            evidence::{
                normalize_indicator_codes, CreateEvidenceParam, Evidence, EvidenceFilter,
                EvidenceStats, StoredFile, UploadedFile, VerifyEvidenceParam, VideoLink,
            },
            user::User,
        },
        service::{indicator::IndicatorService, teacher::ensure_teacher_exists},
        util::{
            file::{
                allowed_extension, content_type, detect_video_platform, infer_evidence_type,
                parse_http_url, ALLOWED_EXTENSIONS,
            },
            sanitize::{non_empty, sanitize, sanitize_opt},
        },
    },
};

pub struct EvidenceService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> EvidenceService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Stores an uploaded file and records it as evidence.
    ///
    /// When `evidence_type` is absent it is inferred from the file name. The file is
    /// removed again if the database insert fails.
    ///
    /// # Returns
    /// - `Ok(Evidence)` - The created item
    /// - `Err(AppError::BadRequest)` - Disallowed extension, unknown indicator code or
    ///   unresolvable teacher
    /// - `Err(AppError::NotFound)` - The resolved teacher does not exist
    pub async fn upload(
        &self,
        caller: &User,
        requested_teacher_id: Option<i32>,
        evidence_type: Option<EvidenceType>,
        indicator_codes: Vec<String>,
        file: UploadedFile,
    ) -> Result<Evidence, AppError> {
        let teacher_id = resolve_teacher(caller, requested_teacher_id)?;

        let Some(ext) = allowed_extension(&file.filename) else {
            return Err(AppError::BadRequest(format!(
                "Invalid file type. Allowed types: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        };
        let indicator_codes = normalize_indicator_codes(indicator_codes);
        IndicatorService::new(self.db)
            .ensure_known_codes(&indicator_codes)
            .await?;
        ensure_teacher_exists(self.db, teacher_id).await?;

        let stored_filename = format!("{}.{}", Uuid::new_v4(), ext);
        let file_size = file.data.len() as i64;
        tokio::fs::write(self.upload_dir.join(&stored_filename), &file.data).await?;

        let evidence_type = evidence_type.unwrap_or_else(|| infer_evidence_type(&file.filename));
        let mime_type = non_empty(file.content_type)
            .unwrap_or_else(|| content_type(&file.filename).to_string());

        let param = CreateEvidenceParam::file(
            teacher_id,
            caller.id,
            evidence_type,
            indicator_codes,
            StoredFile {
                original_filename: sanitize(&file.filename),
                stored_filename: stored_filename.clone(),
                file_size,
                mime_type,
            },
        );

        match EvidenceRepository::new(self.db).create(param).await {
            Ok(evidence) => {
                tracing::info!(
                    "User {} uploaded evidence {} ({} bytes) for teacher {}",
                    caller.id,
                    evidence.id,
                    file_size,
                    teacher_id
                );
                Ok(evidence)
            }
            Err(err) => {
                remove_stored_files(self.upload_dir, &[stored_filename]).await;
                Err(err.into())
            }
        }
    }

    /// Records a link to an externally hosted video.
    pub async fn create_video_link(
        &self,
        caller: &User,
        dto: CreateVideoLinkDto,
    ) -> Result<Evidence, AppError> {
        let teacher_id = resolve_teacher(caller, dto.teacher_id)?;

        let Some(url) = parse_http_url(&dto.video_url) else {
            return Err(AppError::BadRequest(
                "Video URL must be a valid http or https URL".to_string(),
            ));
        };
        let title = sanitize(&dto.video_title);
        if title.is_empty() {
            return Err(AppError::BadRequest("Video title is required".to_string()));
        }
        let indicator_codes = normalize_indicator_codes(dto.indicator_codes);
        IndicatorService::new(self.db)
            .ensure_known_codes(&indicator_codes)
            .await?;
        ensure_teacher_exists(self.db, teacher_id).await?;

        let platform = non_empty(sanitize_opt(dto.video_platform))
            .unwrap_or_else(|| detect_video_platform(&url).to_string());

        let param = CreateEvidenceParam::video(
            teacher_id,
            caller.id,
            dto.evidence_type,
            indicator_codes,
            VideoLink {
                url: url.to_string(),
                title,
                description: sanitize_opt(dto.video_description),
                platform,
            },
        );

        Ok(EvidenceRepository::new(self.db).create(param).await?)
    }

    /// Lists a teacher's items; a TEACHER may only list their own.
    pub async fn get_by_teacher(
        &self,
        caller: &User,
        teacher_id: i32,
        filter: EvidenceFilter,
    ) -> Result<Vec<Evidence>, AppError> {
        if caller.role == UserRole::Teacher && caller.teacher_id != Some(teacher_id) {
            return Err(AppError::Forbidden(
                "You can only view your own evidence".to_string(),
            ));
        }

        Ok(EvidenceRepository::new(self.db)
            .get_by_teacher(teacher_id, &filter)
            .await?)
    }

    pub async fn get_latest(&self, limit: u64) -> Result<Vec<Evidence>, AppError> {
        Ok(EvidenceRepository::new(self.db).get_latest(limit).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Evidence, AppError> {
        EvidenceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn verify(&self, param: VerifyEvidenceParam) -> Result<Evidence, AppError> {
        let (id, verified_by) = (param.id, param.verified_by);
        if let Some(codes) = &param.indicator_codes {
            IndicatorService::new(self.db)
                .ensure_known_codes(codes)
                .await?;
        }

        let evidence = EvidenceRepository::new(self.db)
            .verify(param)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Evidence {} verified by user {}", id, verified_by);

        Ok(evidence)
    }

    /// Deletes an item and its stored file. A TEACHER may only delete their own items.
    pub async fn delete(&self, caller: &User, id: i32) -> Result<(), AppError> {
        let repo = EvidenceRepository::new(self.db);
        let evidence = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if caller.role == UserRole::Teacher && caller.teacher_id != Some(evidence.teacher_id) {
            return Err(AppError::Forbidden(
                "You can only delete your own evidence".to_string(),
            ));
        }

        if !repo.delete(id).await? {
            return Err(not_found());
        }
        if let Some(stored) = evidence.stored_filename {
            remove_stored_files(self.upload_dir, &[stored]).await;
        }

        Ok(())
    }

    /// Totals plus per-type and per-indicator counts.
    pub async fn stats(&self) -> Result<EvidenceStats, AppError> {
        let repo = EvidenceRepository::new(self.db);

        let total = repo.count().await?;
        let verified = repo.count_verified().await?;

        let by_type = repo
            .counts_by_type()
            .await?
            .into_iter()
            .map(|(evidence_type, count)| (evidence_type, count.max(0) as u64))
            .collect();
        let by_indicator = repo
            .counts_by_indicator()
            .await?
            .into_iter()
            .map(|(code, count)| (code, count.max(0) as u64))
            .collect();

        Ok(EvidenceStats {
            total,
            verified,
            by_type,
            by_indicator,
        })
    }
}

/// Picks the teacher an evidence write is recorded against.
///
/// A TEACHER always writes for their linked teacher and any requested id is ignored.
/// ADMIN and PROJECT_MANAGER must name the teacher. Other roles cannot write.
pub fn resolve_teacher(caller: &User, requested: Option<i32>) -> Result<i32, AppError> {
    match caller.role {
        UserRole::Teacher => caller
            .teacher_id
            .ok_or_else(|| AppError::BadRequest("Teacher profile is required".to_string())),
        UserRole::Admin | UserRole::ProjectManager => requested.ok_or_else(|| {
            AppError::BadRequest("teacher_id is required for this role".to_string())
        }),
        _ => Err(AppError::BadRequest(
            "Invalid role for this operation".to_string(),
        )),
    }
}

/// Removes stored upload files, logging failures instead of returning them.
pub async fn remove_stored_files(upload_dir: &Path, stored_filenames: &[String]) {
    for name in stored_filenames {
        if let Err(err) = tokio::fs::remove_file(upload_dir.join(name)).await {
            tracing::warn!("Failed to remove stored file {}: {}", name, err);
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Evidence not found".to_string())
}
