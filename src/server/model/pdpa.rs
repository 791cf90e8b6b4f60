//! PDPA consent and data-subject request models.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ConsentStatus, ConsentType};

use crate::{
    model::pdpa::{
        ActivityExportDto, ConsentDto, ConsentSummaryDto, DeleteMyDataDto,
        DeleteMyDataResultDto, GrantConsentDto, MaskedTeacherDto, MyDataDto, PersonalInfoDto,
        RequiredConsentsDto, RetentionCountsDto, RetentionDatasetDto, RetentionStatsDto,
    },
    server::{
        error::AppError,
        model::{
            assessment::{CompetencyAssessment, DevelopmentPlan},
            evidence::Evidence,
            journal::Journal,
            mentoring::MentoringVisit,
            plc::PlcActivity,
            self_assessment::SelfAssessment,
            teacher::TeacherWithSchool,
            user::User,
        },
        util::sanitize::sanitize_opt,
    },
};

/// Consent types every user is expected to grant.
pub const REQUIRED_CONSENTS: [ConsentType; 3] = [
    ConsentType::DataCollection,
    ConsentType::DataProcessing,
    ConsentType::DataSharing,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Consent {
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

impl Consent {
    pub fn from_entity(entity: entity::consent::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            consent_type: entity.consent_type,
            status: entity.status,
            granted_at: entity.granted_at,
            revoked_at: entity.revoked_at,
            expires_at: entity.expires_at,
            privacy_policy_version: entity.privacy_policy_version,
            terms_version: entity.terms_version,
            ip_address: entity.ip_address,
            user_agent: entity.user_agent,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ConsentDto {
        ConsentDto {
            id: self.id,
            user_id: self.user_id,
            consent_type: self.consent_type,
            status: self.status,
            granted_at: self.granted_at,
            revoked_at: self.revoked_at,
            expires_at: self.expires_at,
            privacy_policy_version: self.privacy_policy_version,
            terms_version: self.terms_version,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Grant request with the request metadata recorded alongside it.
#[derive(Debug, Clone)]
pub struct GrantConsentParam {
    pub user_id: i32,
    pub consent_type: ConsentType,
    pub privacy_policy_version: Option<String>,
    pub terms_version: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub ip_address: String,
    pub user_agent: Option<String>,
}

impl GrantConsentParam {
    pub fn from_dto(
        user_id: i32,
        dto: GrantConsentDto,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Result<Self, AppError> {
        let expires_at = match dto.expires_in_days {
            Some(days) if days < 1 => {
                return Err(AppError::BadRequest(
                    "expires_in_days must be at least 1".to_string(),
                ))
            }
            Some(days) => Some(Utc::now() + chrono::Duration::days(days)),
            None => None,
        };

        Ok(Self {
            user_id,
            consent_type: dto.consent_type,
            privacy_policy_version: sanitize_opt(dto.privacy_policy_version),
            terms_version: sanitize_opt(dto.terms_version),
            expires_at,
            ip_address,
            user_agent,
        })
    }
}

/// Personal data category that can be deleted on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataCategory {
    PersonalInfo,
    Assessments,
    Journals,
    Evidence,
    Mentoring,
    Plc,
    DevelopmentPlans,
}

impl DataCategory {
    /// Parses a request category name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "personal_info" => Some(Self::PersonalInfo),
            "assessments" => Some(Self::Assessments),
            "journals" => Some(Self::Journals),
            "evidence" => Some(Self::Evidence),
            "mentoring" => Some(Self::Mentoring),
            "plc" => Some(Self::Plc),
            "development_plans" => Some(Self::DevelopmentPlans),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal_info",
            Self::Assessments => "assessments",
            Self::Journals => "journals",
            Self::Evidence => "evidence",
            Self::Mentoring => "mentoring",
            Self::Plc => "plc",
            Self::DevelopmentPlans => "development_plans",
        }
    }
}

/// What a data deletion request asks for, resolved from the request body.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteMyDataParam {
    /// Scrub identifying fields and deactivate the account. `categories` limits
    /// which teacher fields are scrubbed; `None` means all.
    Anonymize { categories: Option<Vec<DataCategory>> },
    /// Remove the teacher record with its activities, then the account.
    DeleteAll,
    /// Remove the listed activity categories only.
    Categories(Vec<DataCategory>),
}

impl DeleteMyDataParam {
    /// Resolves the request, preferring anonymize over delete-all over categories.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - None of the three options was given, or
    ///   `categories` was empty or named an unknown category
    pub fn from_dto(dto: DeleteMyDataDto) -> Result<Self, AppError> {
        let categories = dto.categories.map(parse_categories).transpose()?;

        if dto.anonymize.unwrap_or(false) {
            return Ok(Self::Anonymize { categories });
        }
        if dto.delete_all.unwrap_or(false) {
            return Ok(Self::DeleteAll);
        }
        match categories {
            Some(categories) => Ok(Self::Categories(categories)),
            None => Err(AppError::BadRequest(
                "Specify delete_all, categories, or anonymize".to_string(),
            )),
        }
    }
}

/// Parses requested category names, dropping duplicates while keeping order.
fn parse_categories(names: Vec<String>) -> Result<Vec<DataCategory>, AppError> {
    if names.is_empty() {
        return Err(AppError::BadRequest(
            "categories must name at least one category".to_string(),
        ));
    }

    let mut parsed: Vec<DataCategory> = Vec::new();
    let mut unknown: Vec<&str> = Vec::new();
    for name in &names {
        match DataCategory::parse(name) {
            Some(category) if !parsed.contains(&category) => parsed.push(category),
            Some(_) => {}
            None => unknown.push(name.as_str()),
        }
    }

    if !unknown.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Unknown data categories: {}",
            unknown.join(", ")
        )));
    }

    Ok(parsed)
}

/// Consent counts by status plus the status of each required type.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentSummary {
    pub total: u64,
    pub granted: u64,
    pub pending: u64,
    pub revoked: u64,
    pub expired: u64,
    /// Status per entry of `REQUIRED_CONSENTS`, PENDING when never recorded.
    pub required: [ConsentStatus; 3],
}

impl ConsentSummary {
    pub fn from_consents(consents: &[Consent]) -> Self {
        let count = |status: ConsentStatus| {
            consents.iter().filter(|c| c.status == status).count() as u64
        };
        let required = REQUIRED_CONSENTS.map(|consent_type| {
            consents
                .iter()
                .find(|c| c.consent_type == consent_type)
                .map(|c| c.status)
                .unwrap_or(ConsentStatus::Pending)
        });

        Self {
            total: consents.len() as u64,
            granted: count(ConsentStatus::Granted),
            pending: count(ConsentStatus::Pending),
            revoked: count(ConsentStatus::Revoked),
            expired: count(ConsentStatus::Expired),
            required,
        }
    }

    pub fn into_dto(self) -> ConsentSummaryDto {
        let [data_collection, data_processing, data_sharing] = self.required;

        ConsentSummaryDto {
            total: self.total,
            granted: self.granted,
            pending: self.pending,
            revoked: self.revoked,
            expired: self.expired,
            required: RequiredConsentsDto {
                data_collection,
                data_processing,
                data_sharing,
            },
        }
    }
}

/// Everything held about one account and its linked teacher.
#[derive(Debug, Clone, PartialEq)]
pub struct MyData {
    pub user: User,
    pub teacher: Option<TeacherWithSchool>,
    pub mentoring_visits: Vec<MentoringVisit>,
    pub competency_assessments: Vec<CompetencyAssessment>,
    pub self_assessments: Vec<SelfAssessment>,
    pub reflective_journals: Vec<Journal>,
    pub plc_activities: Vec<PlcActivity>,
    pub development_plans: Vec<DevelopmentPlan>,
    pub evidence: Vec<Evidence>,
    pub consents: Vec<Consent>,
    pub exported_at: DateTime<Utc>,
}

impl MyData {
    /// Converts to the export document, masking the teacher's citizen id.
    pub fn into_dto(self) -> MyDataDto {
        let teacher = self.teacher.map(|t| MaskedTeacherDto {
            id: t.teacher.id,
            citizen_id: mask_citizen_id(&t.teacher.citizen_id),
            full_name: t.teacher.full_name,
            email: t.teacher.email,
            phone: t.teacher.phone,
            position: t.teacher.position,
            school_name: t.school.school_name,
        });

        MyDataDto {
            personal_info: PersonalInfoDto {
                user: self.user.into_dto(),
                teacher,
            },
            activities: ActivityExportDto {
                mentoring_visits: self
                    .mentoring_visits
                    .into_iter()
                    .map(MentoringVisit::into_dto)
                    .collect(),
                competency_assessments: self
                    .competency_assessments
                    .into_iter()
                    .map(CompetencyAssessment::into_dto)
                    .collect(),
                self_assessments: self
                    .self_assessments
                    .into_iter()
                    .map(SelfAssessment::into_dto)
                    .collect(),
                reflective_journals: self
                    .reflective_journals
                    .into_iter()
                    .map(Journal::into_dto)
                    .collect(),
                plc_activities: self
                    .plc_activities
                    .into_iter()
                    .map(PlcActivity::into_dto)
                    .collect(),
                development_plans: self
                    .development_plans
                    .into_iter()
                    .map(DevelopmentPlan::into_dto)
                    .collect(),
                evidence: self
                    .evidence
                    .into_iter()
                    .map(Evidence::into_summary_dto)
                    .collect(),
            },
            consents: self.consents.into_iter().map(Consent::into_dto).collect(),
            exported_at: self.exported_at,
        }
    }
}

/// Outcome of a data deletion request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteMyDataResult {
    pub anonymized: bool,
    pub deleted_all: bool,
    pub deleted_categories: Vec<DataCategory>,
}

impl DeleteMyDataResult {
    pub fn into_dto(self) -> DeleteMyDataResultDto {
        DeleteMyDataResultDto {
            anonymized: self.anonymized,
            deleted_all: self.deleted_all,
            deleted_categories: self
                .deleted_categories
                .into_iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

/// Days journals are kept.
pub const JOURNAL_RETENTION_DAYS: i64 = 5 * 365;
/// Days evidence items are kept.
pub const EVIDENCE_RETENTION_DAYS: i64 = 5 * 365;
/// Days competency assessments are kept.
pub const ASSESSMENT_RETENTION_DAYS: i64 = 7 * 365;
/// Rows this close to their retention limit count as expiring.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionDataset {
    pub total: u64,
    pub expiring: u64,
    pub retention_days: i64,
}

impl RetentionDataset {
    pub fn into_dto(self) -> RetentionDatasetDto {
        RetentionDatasetDto {
            total: self.total,
            expiring: self.expiring,
            retention_days: self.retention_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionStats {
    pub reflective_journals: RetentionDataset,
    pub evidence_portfolio: RetentionDataset,
    pub competency_assessments: RetentionDataset,
}

impl RetentionStats {
    pub fn into_dto(self) -> RetentionStatsDto {
        RetentionStatsDto {
            reflective_journals: self.reflective_journals.into_dto(),
            evidence_portfolio: self.evidence_portfolio.into_dto(),
            competency_assessments: self.competency_assessments.into_dto(),
        }
    }
}

/// Row counts per retained dataset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RetentionCounts {
    pub reflective_journals: u64,
    pub evidence_portfolio: u64,
    pub competency_assessments: u64,
}

impl RetentionCounts {
    pub fn total(&self) -> u64 {
        self.reflective_journals + self.evidence_portfolio + self.competency_assessments
    }

    pub fn into_dto(self) -> RetentionCountsDto {
        RetentionCountsDto {
            reflective_journals: self.reflective_journals,
            evidence_portfolio: self.evidence_portfolio,
            competency_assessments: self.competency_assessments,
            total: self.total(),
        }
    }
}

/// Masks a citizen id as its first character, `***`, then its last four characters.
pub fn mask_citizen_id(citizen_id: &str) -> String {
    let chars: Vec<char> = citizen_id.chars().collect();
    if chars.len() <= 5 {
        return "***".to_string();
    }

    let first: String = chars[..1].iter().collect();
    let last: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", first, last)
}
