use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, Region, TeacherStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    api::default_entries,
    assessment::{CompetencyAssessmentDto, DevelopmentPlanDto},
    journal::JournalDto,
    mentoring::MentoringVisitDto,
    plc::PlcActivityDto,
    school::{SchoolDto, SchoolSummaryDto},
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherDto {
    pub id: i32,
    pub citizen_id: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub cohort: i32,
    pub appointment_date: NaiveDate,
    pub position: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: i32,
    pub status: TeacherStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short teacher reference embedded in activity rows.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherSummaryDto {
    pub id: i32,
    pub full_name: String,
    pub school_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherListItemDto {
    #[serde(flatten)]
    pub teacher: TeacherDto,
    pub school: SchoolSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherDetailDto {
    #[serde(flatten)]
    pub teacher: TeacherDto,
    pub school: SchoolDto,
    /// Five latest visits
    pub mentoring_visits: Vec<MentoringVisitDto>,
    pub competency_assessments: Vec<CompetencyAssessmentDto>,
    /// Six latest journal months
    pub reflective_journals: Vec<JournalDto>,
    /// Ten latest PLC sessions
    pub plc_activities: Vec<PlcActivityDto>,
    pub development_plans: Vec<DevelopmentPlanDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherStatisticsDto {
    pub visits_count: u64,
    pub journals_count: u64,
    pub plc_count: u64,
    pub latest_assessment: Option<CompetencyAssessmentDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTeachersDto {
    pub teachers: Vec<TeacherListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeacherDto {
    pub citizen_id: String,
    pub full_name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub cohort: i32,
    pub appointment_date: NaiveDate,
    pub position: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: i32,
    pub status: Option<TeacherStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTeacherDto {
    pub citizen_id: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub cohort: Option<i32>,
    pub appointment_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub school_id: Option<i32>,
    pub status: Option<TeacherStatus>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct TeacherQueryDto {
    /// Substring of full name, citizen id, or email
    pub search: Option<String>,
    pub region: Option<Region>,
    pub province: Option<String>,
    pub school_id: Option<i32>,
    pub status: Option<TeacherStatus>,
    pub cohort: Option<i32>,
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}
