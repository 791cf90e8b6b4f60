use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::VisitType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::default_entries, teacher::TeacherSummaryDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MentoringVisitDto {
    pub id: i32,
    pub teacher_id: i32,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub observer: String,
    pub focus_area: String,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up_required: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teacher: Option<TeacherSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMentoringVisitsDto {
    pub visits: Vec<MentoringVisitDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMentoringVisitDto {
    pub teacher_id: i32,
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub observer: String,
    pub focus_area: String,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    #[serde(default)]
    pub follow_up_required: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMentoringVisitDto {
    pub visit_date: Option<NaiveDate>,
    pub visit_type: Option<VisitType>,
    pub observer: Option<String>,
    pub focus_area: Option<String>,
    pub strengths: Option<String>,
    pub challenges: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up_required: Option<bool>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct MentoringQueryDto {
    pub teacher_id: Option<i32>,
    pub visit_type: Option<VisitType>,
    /// Inclusive lower bound on visit date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on visit date
    pub end_date: Option<NaiveDate>,
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}
