//! E-portfolio evidence domain models and parameters.
//!
//! An evidence item is either an uploaded file or a link to an externally hosted
//! video. Indicator codes live in a child table and are loaded with the item.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EvidenceItemType, EvidenceType};

use crate::{
    model::{
        evidence::{
            EvidenceDto, EvidenceFilterDto, EvidenceStatsDto, EvidenceTypeCountDto,
            IndicatorCountDto, VerifyEvidenceDto,
        },
        pdpa::EvidenceSummaryDto,
    },
    server::util::sanitize::{non_empty, sanitize},
};

/// URL prefix stored files are served from.
pub const UPLOADS_URL_PREFIX: &str = "/api/uploads";

#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub id: i32,
    pub teacher_id: i32,
    pub item_type: EvidenceItemType,
    pub evidence_type: EvidenceType,
    pub indicator_codes: Vec<String>,
    pub original_filename: Option<String>,
    /// `<uuid>.<ext>` name inside the upload directory.
    pub stored_filename: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub video_url: Option<String>,
    pub video_title: Option<String>,
    pub video_description: Option<String>,
    pub video_platform: Option<String>,
    /// User id of the uploader.
    pub uploaded_by: i32,
    pub is_verified: bool,
    pub verified_by: Option<i32>,
    pub verified_at: Option<DateTime<Utc>>,
    pub self_assessment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Evidence {
    /// Converts an evidence row and its indicator rows at the repository boundary.
    pub fn from_entity(
        entity: entity::evidence_portfolio::Model,
        indicators: Vec<entity::evidence_indicator::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            item_type: entity.item_type,
            evidence_type: entity.evidence_type,
            indicator_codes: indicators.into_iter().map(|i| i.indicator_code).collect(),
            original_filename: entity.original_filename,
            stored_filename: entity.stored_filename,
            file_size: entity.file_size,
            mime_type: entity.mime_type,
            video_url: entity.video_url,
            video_title: entity.video_title,
            video_description: entity.video_description,
            video_platform: entity.video_platform,
            uploaded_by: entity.uploaded_by,
            is_verified: entity.is_verified,
            verified_by: entity.verified_by,
            verified_at: entity.verified_at,
            self_assessment_id: entity.self_assessment_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EvidenceDto {
        let file_url = self
            .stored_filename
            .as_ref()
            .map(|name| format!("{}/{}", UPLOADS_URL_PREFIX, name));

        EvidenceDto {
            id: self.id,
            teacher_id: self.teacher_id,
            item_type: self.item_type,
            evidence_type: self.evidence_type,
            indicator_codes: self.indicator_codes,
            original_filename: self.original_filename,
            stored_filename: self.stored_filename,
            file_size: self.file_size,
            mime_type: self.mime_type,
            file_url,
            video_url: self.video_url,
            video_title: self.video_title,
            video_description: self.video_description,
            video_platform: self.video_platform,
            uploaded_by: self.uploaded_by,
            is_verified: self.is_verified,
            verified_by: self.verified_by,
            verified_at: self.verified_at,
            self_assessment_id: self.self_assessment_id,
            created_at: self.created_at,
        }
    }

    /// Short form used in the personal data export.
    pub fn into_summary_dto(self) -> EvidenceSummaryDto {
        EvidenceSummaryDto {
            id: self.id,
            evidence_type: self.evidence_type,
            original_filename: self.original_filename,
            video_title: self.video_title,
            is_verified: self.is_verified,
            created_at: self.created_at,
        }
    }
}

/// Fields for a new evidence item. File and video fields are filled by the
/// constructor that matches the item type.
#[derive(Debug, Clone)]
pub struct CreateEvidenceParam {
    pub teacher_id: i32,
    pub uploaded_by: i32,
    pub item_type: EvidenceItemType,
    pub evidence_type: EvidenceType,
    pub indicator_codes: Vec<String>,
    pub original_filename: Option<String>,
    pub stored_filename: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub video_url: Option<String>,
    pub video_title: Option<String>,
    pub video_description: Option<String>,
    pub video_platform: Option<String>,
}

/// Metadata of a file already written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub original_filename: String,
    pub stored_filename: String,
    pub file_size: i64,
    pub mime_type: String,
}

/// Video link fields after validation and platform detection.
#[derive(Debug, Clone)]
pub struct VideoLink {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub platform: String,
}

impl CreateEvidenceParam {
    pub fn file(
        teacher_id: i32,
        uploaded_by: i32,
        evidence_type: EvidenceType,
        indicator_codes: Vec<String>,
        file: StoredFile,
    ) -> Self {
        Self {
            teacher_id,
            uploaded_by,
            item_type: EvidenceItemType::File,
            evidence_type,
            indicator_codes,
            original_filename: Some(file.original_filename),
            stored_filename: Some(file.stored_filename),
            file_size: Some(file.file_size),
            mime_type: Some(file.mime_type),
            video_url: None,
            video_title: None,
            video_description: None,
            video_platform: None,
        }
    }

    pub fn video(
        teacher_id: i32,
        uploaded_by: i32,
        evidence_type: EvidenceType,
        indicator_codes: Vec<String>,
        video: VideoLink,
    ) -> Self {
        Self {
            teacher_id,
            uploaded_by,
            item_type: EvidenceItemType::VideoLink,
            evidence_type,
            indicator_codes,
            original_filename: None,
            stored_filename: None,
            file_size: None,
            mime_type: None,
            video_url: Some(video.url),
            video_title: Some(video.title),
            video_description: video.description,
            video_platform: Some(video.platform),
        }
    }
}

/// A file part received by the upload endpoint, not yet written to disk.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    /// Content type sent by the client, if any.
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Evidence counts for the reviewer summary.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceStats {
    pub total: u64,
    pub verified: u64,
    /// Ordered by count descending.
    pub by_type: Vec<(EvidenceType, u64)>,
    /// Ordered by count descending, then code.
    pub by_indicator: Vec<(String, u64)>,
}

impl EvidenceStats {
    pub fn into_dto(self) -> EvidenceStatsDto {
        EvidenceStatsDto {
            total: self.total,
            verified: self.verified,
            unverified: self.total.saturating_sub(self.verified),
            by_type: self
                .by_type
                .into_iter()
                .map(|(evidence_type, count)| EvidenceTypeCountDto {
                    evidence_type,
                    count,
                })
                .collect(),
            by_indicator: self
                .by_indicator
                .into_iter()
                .map(|(indicator_code, count)| IndicatorCountDto {
                    indicator_code,
                    count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvidenceFilter {
    pub evidence_type: Option<EvidenceType>,
    pub indicator_code: Option<String>,
    pub is_verified: Option<bool>,
}

impl EvidenceFilter {
    pub fn from_dto(dto: EvidenceFilterDto) -> Self {
        Self {
            evidence_type: dto.evidence_type,
            indicator_code: non_empty(dto.indicator_code),
            is_verified: dto.is_verified,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerifyEvidenceParam {
    pub id: i32,
    pub verified_by: i32,
    pub indicator_codes: Option<Vec<String>>,
    pub evidence_type: Option<EvidenceType>,
}

impl VerifyEvidenceParam {
    pub fn from_dto(id: i32, verified_by: i32, dto: VerifyEvidenceDto) -> Self {
        Self {
            id,
            verified_by,
            indicator_codes: dto.indicator_codes.map(normalize_indicator_codes),
            evidence_type: dto.evidence_type,
        }
    }
}

/// Sanitizes indicator codes, dropping blanks and duplicates while keeping order.
pub fn normalize_indicator_codes(codes: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(codes.len());

    for code in codes {
        let code = sanitize(&code);
        if !code.is_empty() && !out.contains(&code) {
            out.push(code);
        }
    }

    out
}

/// Splits the comma separated `indicator_codes` multipart field.
pub fn split_indicator_codes(raw: &str) -> Vec<String> {
    normalize_indicator_codes(raw.split(',').map(str::to_string).collect())
}
