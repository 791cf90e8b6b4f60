use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    AssessmentPeriod, CompetencyLevel, Region, TeacherStatus, VisitType,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::school::SchoolSummaryDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LatestAssessmentDto {
    pub assessment_period: AssessmentPeriod,
    pub overall_level: CompetencyLevel,
    pub pedagogy_score: i32,
    pub classroom_score: i32,
    pub community_score: i32,
    pub professionalism_score: i32,
    pub assessed_at: DateTime<Utc>,
    pub assessor: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LatestVisitDto {
    pub visit_date: NaiveDate,
    pub visit_type: VisitType,
    pub observer: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherAssessmentRowDto {
    pub teacher_id: i32,
    pub full_name: String,
    pub position: String,
    pub cohort: i32,
    pub school: SchoolSummaryDto,
    pub assessment_count: u64,
    pub latest_assessment: Option<LatestAssessmentDto>,
    /// Mean of the latest assessment's four scores
    pub average_score: Option<f64>,
    pub mentoring_count: u64,
    pub latest_mentoring: Option<LatestVisitDto>,
    pub journal_count: u64,
    pub plc_count: u64,
    pub plan_count: u64,
    pub status: TeacherStatus,
    pub last_activity_date: Option<NaiveDate>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct TeacherAssessmentQueryDto {
    pub school_id: Option<i32>,
    pub province: Option<String>,
    pub region: Option<Region>,
    pub cohort: Option<i32>,
    pub status: Option<TeacherStatus>,
}
