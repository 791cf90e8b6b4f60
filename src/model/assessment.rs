use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::teacher::TeacherSummaryDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CompetencyAssessmentDto {
    pub id: i32,
    pub teacher_id: i32,
    pub assessment_period: AssessmentPeriod,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    pub overall_level: CompetencyLevel,
    pub assessor: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Present on list and detail responses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teacher: Option<TeacherSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCompetencyAssessmentDto {
    pub teacher_id: i32,
    pub assessment_period: AssessmentPeriod,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    pub overall_level: CompetencyLevel,
    pub assessor: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateCompetencyAssessmentDto {
    pub assessment_period: Option<AssessmentPeriod>,
    pub pedagogy_score: Option<i32>,
    pub classroom_score: Option<i32>,
    pub community_score: Option<i32>,
    pub professionalism_score: Option<i32>,
    pub overall_level: Option<CompetencyLevel>,
    pub assessor: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DevelopmentPlanDto {
    pub id: i32,
    pub teacher_id: i32,
    pub focus_competency: String,
    pub action_plan: String,
    pub support_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress_status: String,
    pub progress_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDevelopmentPlanDto {
    pub teacher_id: i32,
    pub focus_competency: String,
    pub action_plan: String,
    pub support_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to `NOT_STARTED`
    pub progress_status: Option<String>,
    pub progress_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateDevelopmentPlanDto {
    pub focus_competency: Option<String>,
    pub action_plan: Option<String>,
    pub support_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress_status: Option<String>,
    pub progress_notes: Option<String>,
}
