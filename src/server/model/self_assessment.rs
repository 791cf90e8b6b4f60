//! Teacher self-assessment domain models.
//!
//! A self-assessment moves DRAFT -> SUBMITTED -> REVIEWED. Evidence items link to
//! it through `evidence_portfolio.self_assessment_id`.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel, SelfAssessmentStatus};

use crate::{
    model::self_assessment::{
        CreateSelfAssessmentDto, SelfAssessmentDto, SelfAssessmentQueryDto,
        UpdateSelfAssessmentDto,
    },
    server::{
        error::AppError,
        model::evidence::Evidence,
        util::{parse::validate_score, sanitize::sanitize_opt},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct SelfAssessment {
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
    /// User id of the reviewer.
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewer_comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub portfolio_items: Vec<Evidence>,
}

impl SelfAssessment {
    pub fn from_entity(
        entity: entity::self_assessment::Model,
        portfolio_items: Vec<Evidence>,
    ) -> Self {
        Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            assessment_period: entity.assessment_period,
            pedagogy_score: entity.pedagogy_score,
            classroom_score: entity.classroom_score,
            community_score: entity.community_score,
            professionalism_score: entity.professionalism_score,
            pedagogy_reflection: entity.pedagogy_reflection,
            classroom_reflection: entity.classroom_reflection,
            community_reflection: entity.community_reflection,
            professionalism_reflection: entity.professionalism_reflection,
            overall_level: entity.overall_level,
            strengths: entity.strengths,
            areas_for_improvement: entity.areas_for_improvement,
            action_plan: entity.action_plan,
            status: entity.status,
            submitted_at: entity.submitted_at,
            reviewed_by: entity.reviewed_by,
            reviewed_at: entity.reviewed_at,
            reviewer_comments: entity.reviewer_comments,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            portfolio_items,
        }
    }

    pub fn into_dto(self) -> SelfAssessmentDto {
        SelfAssessmentDto {
            id: self.id,
            teacher_id: self.teacher_id,
            assessment_period: self.assessment_period,
            pedagogy_score: self.pedagogy_score,
            classroom_score: self.classroom_score,
            community_score: self.community_score,
            professionalism_score: self.professionalism_score,
            pedagogy_reflection: self.pedagogy_reflection,
            classroom_reflection: self.classroom_reflection,
            community_reflection: self.community_reflection,
            professionalism_reflection: self.professionalism_reflection,
            overall_level: self.overall_level,
            strengths: self.strengths,
            areas_for_improvement: self.areas_for_improvement,
            action_plan: self.action_plan,
            status: self.status,
            submitted_at: self.submitted_at,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at,
            reviewer_comments: self.reviewer_comments,
            created_at: self.created_at,
            updated_at: self.updated_at,
            portfolio_items: self
                .portfolio_items
                .into_iter()
                .map(Evidence::into_dto)
                .collect(),
        }
    }
}

/// Scores, reflections, and summary fields shared by create and update.
#[derive(Debug, Clone)]
pub struct SelfAssessmentContent {
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
}

#[derive(Debug, Clone)]
pub struct CreateSelfAssessmentParam {
    /// Explicit teacher from the request body; the caller's teacher is used otherwise.
    pub teacher_id: Option<i32>,
    pub content: SelfAssessmentContent,
    pub portfolio_item_ids: Vec<i32>,
}

impl CreateSelfAssessmentParam {
    pub fn from_dto(dto: CreateSelfAssessmentDto) -> Result<Self, AppError> {
        validate_score("pedagogy_score", dto.pedagogy_score)?;
        validate_score("classroom_score", dto.classroom_score)?;
        validate_score("community_score", dto.community_score)?;
        validate_score("professionalism_score", dto.professionalism_score)?;

        Ok(Self {
            teacher_id: dto.teacher_id,
            content: SelfAssessmentContent {
                assessment_period: dto.assessment_period,
                pedagogy_score: dto.pedagogy_score,
                classroom_score: dto.classroom_score,
                community_score: dto.community_score,
                professionalism_score: dto.professionalism_score,
                pedagogy_reflection: sanitize_opt(dto.pedagogy_reflection),
                classroom_reflection: sanitize_opt(dto.classroom_reflection),
                community_reflection: sanitize_opt(dto.community_reflection),
                professionalism_reflection: sanitize_opt(dto.professionalism_reflection),
                overall_level: dto.overall_level,
                strengths: sanitize_opt(dto.strengths),
                areas_for_improvement: sanitize_opt(dto.areas_for_improvement),
                action_plan: sanitize_opt(dto.action_plan),
            },
            portfolio_item_ids: dto.portfolio_item_ids,
        })
    }
}

/// Partial update; `None` leaves a field unchanged. `portfolio_item_ids` replaces
/// the linked items when present.
#[derive(Debug, Clone, Default)]
pub struct UpdateSelfAssessmentParam {
    pub id: i32,
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
    pub portfolio_item_ids: Option<Vec<i32>>,
}

impl UpdateSelfAssessmentParam {
    pub fn from_dto(id: i32, dto: UpdateSelfAssessmentDto) -> Result<Self, AppError> {
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
            pedagogy_reflection: sanitize_opt(dto.pedagogy_reflection),
            classroom_reflection: sanitize_opt(dto.classroom_reflection),
            community_reflection: sanitize_opt(dto.community_reflection),
            professionalism_reflection: sanitize_opt(dto.professionalism_reflection),
            overall_level: dto.overall_level,
            strengths: sanitize_opt(dto.strengths),
            areas_for_improvement: sanitize_opt(dto.areas_for_improvement),
            action_plan: sanitize_opt(dto.action_plan),
            portfolio_item_ids: dto.portfolio_item_ids,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelfAssessmentFilter {
    pub teacher_id: Option<i32>,
    pub period: Option<AssessmentPeriod>,
    pub status: Option<SelfAssessmentStatus>,
}

impl SelfAssessmentFilter {
    pub fn from_dto(dto: SelfAssessmentQueryDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            period: dto.period,
            status: dto.status,
        }
    }
}
