use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::IndicatorAspect;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Readiness band of a completeness score.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletenessStatus {
    /// 80 and above
    Ready,
    /// 50 to 79
    Draft,
    Insufficient,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CheckResultDto {
    pub code: String,
    pub name: String,
    pub weight: u32,
    pub passed: bool,
    /// `weight` when passed, otherwise 0
    pub score: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IndicatorCompletenessDto {
    pub code: String,
    pub name: String,
    pub aspect: IndicatorAspect,
    pub score: u32,
    pub status: CompletenessStatus,
    /// Names of the checks not yet satisfied
    pub missing: Vec<String>,
    /// Evidence items tagged with the indicator or one of its checks
    pub evidence_ids: Vec<i32>,
    pub checks: Vec<CheckResultDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AspectCompletenessDto {
    pub aspect: IndicatorAspect,
    pub score: u32,
    pub status: CompletenessStatus,
    pub indicator_count: u64,
    /// Indicators scoring at least the passing score
    pub passed_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CriterionResultDto {
    pub required: u64,
    pub actual: u64,
    pub passed: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PassCriteriaResultDto {
    pub professional: CriterionResultDto,
    /// Absent in rounds that do not score the social aspect
    pub social: Option<CriterionResultDto>,
    pub personal: CriterionResultDto,
    pub overall: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherCompletenessDto {
    pub teacher_id: i32,
    pub teacher_name: String,
    pub assessment_round: i32,
    pub generated_at: DateTime<Utc>,
    pub score: u32,
    pub status: CompletenessStatus,
    pub aspects: Vec<AspectCompletenessDto>,
    pub indicators: Vec<IndicatorCompletenessDto>,
    pub pass_criteria: PassCriteriaResultDto,
}

/// Indicators an assessment round requires to pass, per aspect.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PassThresholdDto {
    pub first_round: i32,
    pub last_round: i32,
    pub professional: u64,
    pub social: Option<u64>,
    pub personal: u64,
    /// Minimum indicator score counted as passed
    pub passing_score: u32,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct RoundQueryDto {
    /// Assessment round 1-4, clamped into range (default: 1)
    pub round: Option<i32>,
}
