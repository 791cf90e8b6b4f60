use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel, SelfAssessmentStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::evidence::EvidenceDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelfAssessmentDto {
    pub id: i32,
    pub teacher_id: i32,
    pub assessment_period: AssessmentPeriod,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    pub pedagogy_reflection: Option<String>,
    pub classroom_reflection: Option<String>,
    pub community_reflection: Option<String>,
    pub professionalism_reflection: Option<String>,
    pub overall_level: CompetencyLevel,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub action_plan: Option<String>,
    pub status: SelfAssessmentStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub portfolio_items: Vec<EvidenceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateSelfAssessmentDto {
    /// Defaults to the caller's linked teacher
    pub teacher_id: Option<i32>,
    pub assessment_period: AssessmentPeriod,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    pub pedagogy_reflection: Option<String>,
    pub classroom_reflection: Option<String>,
    pub community_reflection: Option<String>,
    pub professionalism_reflection: Option<String>,
    pub overall_level: CompetencyLevel,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub action_plan: Option<String>,
    #[serde(default)]
    pub portfolio_item_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateSelfAssessmentDto {
    pub assessment_period: Option<AssessmentPeriod>,
    pub pedagogy_score: Option<i32>,
    pub classroom_score: Option<i32>,
    pub community_score: Option<i32>,
    pub professionalism_score: Option<i32>,
    pub pedagogy_reflection: Option<String>,
    pub classroom_reflection: Option<String>,
    pub community_reflection: Option<String>,
    pub professionalism_reflection: Option<String>,
    pub overall_level: Option<CompetencyLevel>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub action_plan: Option<String>,
    /// Replaces the linked portfolio items when present
    pub portfolio_item_ids: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ReviewSelfAssessmentDto {
    pub reviewer_comments: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct SelfAssessmentQueryDto {
    pub period: Option<AssessmentPeriod>,
    pub status: Option<SelfAssessmentStatus>,
    /// Only honoured for managers and reviewers
    pub teacher_id: Option<i32>,
}
