use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    assessment::{CompetencyAssessmentDto, DevelopmentPlanDto},
    journal::JournalDto,
    mentoring::MentoringVisitDto,
    plc::PlcActivityDto,
    self_assessment::SelfAssessmentDto,
    user::UserDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConsentDto {
    pub id: i32,
    pub user_id: i32,
    pub consent_type: ConsentType,
    pub status: ConsentStatus,
    pub granted_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub privacy_policy_version: Option<String>,
    pub terms_version: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GrantConsentDto {
    pub consent_type: ConsentType,
    pub privacy_policy_version: Option<String>,
    pub terms_version: Option<String>,
    /// Days until the consent expires, at least 1
    pub expires_in_days: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RequiredConsentsDto {
    pub data_collection: ConsentStatus,
    pub data_processing: ConsentStatus,
    pub data_sharing: ConsentStatus,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConsentSummaryDto {
    pub total: u64,
    pub granted: u64,
    pub pending: u64,
    pub revoked: u64,
    pub expired: u64,
    pub required: RequiredConsentsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConsentCheckDto {
    pub consent_type: ConsentType,
    pub has_consent: bool,
}

/// Teacher record with the citizen id masked.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MaskedTeacherDto {
    pub id: i32,
    pub citizen_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: String,
    pub school_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PersonalInfoDto {
    pub user: UserDto,
    pub teacher: Option<MaskedTeacherDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EvidenceSummaryDto {
    pub id: i32,
    pub evidence_type: entity::sea_orm_active_enums::EvidenceType,
    pub original_filename: Option<String>,
    pub video_title: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ActivityExportDto {
    pub mentoring_visits: Vec<MentoringVisitDto>,
    pub competency_assessments: Vec<CompetencyAssessmentDto>,
    pub self_assessments: Vec<SelfAssessmentDto>,
    pub reflective_journals: Vec<JournalDto>,
    pub plc_activities: Vec<PlcActivityDto>,
    pub development_plans: Vec<DevelopmentPlanDto>,
    pub evidence: Vec<EvidenceSummaryDto>,
}

/// Right-of-access export of everything held about the caller.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MyDataDto {
    pub personal_info: PersonalInfoDto,
    pub activities: ActivityExportDto,
    pub consents: Vec<ConsentDto>,
    pub exported_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DeleteMyDataDto {
    pub delete_all: Option<bool>,
    /// Any of personal_info, assessments, journals, evidence, mentoring, plc, development_plans
    pub categories: Option<Vec<String>>,
    pub anonymize: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeleteMyDataResultDto {
    pub anonymized: bool,
    pub deleted_all: bool,
    /// Categories that were deleted, in request order
    pub deleted_categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct ExportQueryDto {
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExportDto {
    pub format: ExportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MyDataDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub exported_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RetentionDatasetDto {
    pub total: u64,
    pub expiring: u64,
    pub retention_days: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RetentionStatsDto {
    pub reflective_journals: RetentionDatasetDto,
    pub evidence_portfolio: RetentionDatasetDto,
    pub competency_assessments: RetentionDatasetDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RetentionCountsDto {
    pub reflective_journals: u64,
    pub evidence_portfolio: u64,
    pub competency_assessments: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RetentionCleanupDto {
    pub dry_run: bool,
    #[serde(flatten)]
    pub counts: RetentionCountsDto,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct CleanupQueryDto {
    #[serde(default)]
    pub dry_run: bool,
}
