//! Competency assessment and development plan (IDP) domain models.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel};

use crate::{
    model::assessment::{
        CompetencyAssessmentDto, CreateCompetencyAssessmentDto, CreateDevelopmentPlanDto,
        DevelopmentPlanDto, UpdateCompetencyAssessmentDto, UpdateDevelopmentPlanDto,
    },
    server::{
        error::AppError,
        model::teacher::TeacherSummary,
        util::{
            parse::{validate_date_range, validate_score},
            sanitize::{sanitize, sanitize_opt},
        },
    },
};

/// Default progress status for a new development plan.
pub const PLAN_NOT_STARTED: &str = "NOT_STARTED";

/// Mentor-scored competency assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetencyAssessment {
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
    /// Assessed teacher, loaded by list and detail queries.
    pub teacher: Option<TeacherSummary>,
}

impl CompetencyAssessment {
    pub fn from_entity(entity: entity::competency_assessment::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            assessment_period: entity.assessment_period,
            pedagogy_score: entity.pedagogy_score,
            classroom_score: entity.classroom_score,
            community_score: entity.community_score,
            professionalism_score: entity.professionalism_score,
            overall_level: entity.overall_level,
            assessor: entity.assessor,
            notes: entity.notes,
            created_at: entity.created_at,
            teacher: None,
        }
    }

    /// Converts an assessment joined with its teacher.
    pub fn from_entity_with_teacher(
        entity: entity::competency_assessment::Model,
        teacher: Option<entity::teacher::Model>,
    ) -> Self {
        Self {
            teacher: teacher.as_ref().map(TeacherSummary::from_entity),
            ..Self::from_entity(entity)
        }
    }

    /// Mean of the four competency scores.
    pub fn average_score(&self) -> f64 {
        let sum = self.pedagogy_score
            + self.classroom_score
            + self.community_score
            + self.professionalism_score;
        sum as f64 / 4.0
    }

    pub fn into_dto(self) -> CompetencyAssessmentDto {
        CompetencyAssessmentDto {
            id: self.id,
            teacher_id: self.teacher_id,
            assessment_period: self.assessment_period,
            pedagogy_score: self.pedagogy_score,
            classroom_score: self.classroom_score,
            community_score: self.community_score,
            professionalism_score: self.professionalism_score,
            overall_level: self.overall_level,
            assessor: self.assessor,
            notes: self.notes,
            created_at: self.created_at,
            teacher: self.teacher.map(TeacherSummary::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetencyAssessmentParam {
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

impl CreateCompetencyAssessmentParam {
    /// Builds insert parameters, rejecting any score outside 1 through 5.
    pub fn from_dto(dto: CreateCompetencyAssessmentDto) -> Result<Self, AppError> {
        validate_score("pedagogy_score", dto.pedagogy_score)?;
        validate_score("classroom_score", dto.classroom_score)?;
        validate_score("community_score", dto.community_score)?;
        validate_score("professionalism_score", dto.professionalism_score)?;

        Ok(Self {
            teacher_id: dto.teacher_id,
            assessment_period: dto.assessment_period,
            pedagogy_score: dto.pedagogy_score,
            classroom_score: dto.classroom_score,
            community_score: dto.community_score,
            professionalism_score: dto.professionalism_score,
            overall_level: dto.overall_level,
            assessor: sanitize(&dto.assessor),
            notes: sanitize_opt(dto.notes),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCompetencyAssessmentParam {
    pub id: i32,
    pub assessment_period: Option<AssessmentPeriod>,
    pub pedagogy_score: Option<i32>,
    pub classroom_score: Option<i32>,
    pub community_score: Option<i32>,
    pub professionalism_score: Option<i32>,
    pub overall_level: Option<CompetencyLevel>,
    pub assessor: Option<String>,
    pub notes: Option<String>,
}

impl UpdateCompetencyAssessmentParam {
    pub fn from_dto(id: i32, dto: UpdateCompetencyAssessmentDto) -> Result<Self, AppError> {
        let scores = [
            ("pedagogy_score", dto.pedagogy_score),
            ("classroom_score", dto.classroom_score),
            ("community_score", dto.community_score),
            ("professionalism_score", dto.professionalism_score),
        ];
        for (field, score) in scores {
            if let Some(score) = score {
                validate_score(field, score)?;
            }
        }

        Ok(Self {
            id,
            assessment_period: dto.assessment_period,
            pedagogy_score: dto.pedagogy_score,
            classroom_score: dto.classroom_score,
            community_score: dto.community_score,
            professionalism_score: dto.professionalism_score,
            overall_level: dto.overall_level,
            assessor: dto.assessor.as_deref().map(sanitize),
            notes: sanitize_opt(dto.notes),
        })
    }
}

/// Individual development plan.
#[derive(Debug, Clone, PartialEq)]
pub struct DevelopmentPlan {
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

impl DevelopmentPlan {
    pub fn from_entity(entity: entity::development_plan::Model) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            focus_competency: entity.focus_competency,
            action_plan: entity.action_plan,
            support_type: entity.support_type,
            start_date: entity.start_date,
            end_date: entity.end_date,
            progress_status: entity.progress_status,
            progress_notes: entity.progress_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DevelopmentPlanDto {
        DevelopmentPlanDto {
            id: self.id,
            teacher_id: self.teacher_id,
            focus_competency: self.focus_competency,
            action_plan: self.action_plan,
            support_type: self.support_type,
            start_date: self.start_date,
            end_date: self.end_date,
            progress_status: self.progress_status,
            progress_notes: self.progress_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDevelopmentPlanParam {
    pub teacher_id: i32,
    pub focus_competency: String,
    pub action_plan: String,
    pub support_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress_status: String,
    pub progress_notes: Option<String>,
}

impl CreateDevelopmentPlanParam {
    pub fn from_dto(dto: CreateDevelopmentPlanDto) -> Result<Self, AppError> {
        validate_date_range(dto.start_date, dto.end_date)?;

        Ok(Self {
            teacher_id: dto.teacher_id,
            focus_competency: sanitize(&dto.focus_competency),
            action_plan: sanitize(&dto.action_plan),
            support_type: sanitize(&dto.support_type),
            start_date: dto.start_date,
            end_date: dto.end_date,
            progress_status: sanitize_opt(dto.progress_status)
                .unwrap_or_else(|| PLAN_NOT_STARTED.to_string()),
            progress_notes: sanitize_opt(dto.progress_notes),
        })
    }
}

/// Partial plan update. The date range is checked against the stored dates in the
/// service, since only one end of it may be present here.
#[derive(Debug, Clone, Default)]
pub struct UpdateDevelopmentPlanParam {
    pub id: i32,
    pub focus_competency: Option<String>,
    pub action_plan: Option<String>,
    pub support_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress_status: Option<String>,
    pub progress_notes: Option<String>,
}

impl UpdateDevelopmentPlanParam {
    pub fn from_dto(id: i32, dto: UpdateDevelopmentPlanDto) -> Self {
        Self {
            id,
            focus_competency: dto.focus_competency.as_deref().map(sanitize),
            action_plan: dto.action_plan.as_deref().map(sanitize),
            support_type: dto.support_type.as_deref().map(sanitize),
            start_date: dto.start_date,
            end_date: dto.end_date,
            progress_status: sanitize_opt(dto.progress_status),
            progress_notes: sanitize_opt(dto.progress_notes),
        }
    }
}
