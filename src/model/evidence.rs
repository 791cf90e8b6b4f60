use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EvidenceItemType, EvidenceType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EvidenceDto {
    pub id: i32,
    pub teacher_id: i32,
    pub item_type: EvidenceItemType,
    pub evidence_type: EvidenceType,
    pub indicator_codes: Vec<String>,
    pub original_filename: Option<String>,
    pub stored_filename: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    /// Relative URL the stored file is served from
    pub file_url: Option<String>,
    pub video_url: Option<String>,
    pub video_title: Option<String>,
    pub video_description: Option<String>,
    pub video_platform: Option<String>,
    pub uploaded_by: i32,
    pub is_verified: bool,
    pub verified_by: Option<i32>,
    pub verified_at: Option<DateTime<Utc>>,
    pub self_assessment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Multipart body of `POST /api/evidence/upload`, documented for OpenAPI only.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UploadEvidenceForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub evidence_type: Option<EvidenceType>,
    /// Comma separated indicator codes
    pub indicator_codes: Option<String>,
    /// Required for ADMIN and PROJECT_MANAGER, ignored for TEACHER
    pub teacher_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateVideoLinkDto {
    pub video_url: String,
    pub video_title: String,
    pub video_description: Option<String>,
    /// Detected from the URL when absent
    pub video_platform: Option<String>,
    pub evidence_type: EvidenceType,
    #[serde(default)]
    pub indicator_codes: Vec<String>,
    pub teacher_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct VerifyEvidenceDto {
    /// Replaces the indicator codes when present
    pub indicator_codes: Option<Vec<String>>,
    pub evidence_type: Option<EvidenceType>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct EvidenceFilterDto {
    pub evidence_type: Option<EvidenceType>,
    pub indicator_code: Option<String>,
    pub is_verified: Option<bool>,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct EvidenceLimitDto {
    /// Maximum items returned (default: 50)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    50
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EvidenceTypeCountDto {
    pub evidence_type: EvidenceType,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IndicatorCountDto {
    pub indicator_code: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EvidenceStatsDto {
    pub total: u64,
    pub verified: u64,
    pub unverified: u64,
    pub by_type: Vec<EvidenceTypeCountDto>,
    pub by_indicator: Vec<IndicatorCountDto>,
}
