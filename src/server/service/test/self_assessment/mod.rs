use crate::server::{
    error::AppError,
    model::{
        self_assessment::{
            CreateSelfAssessmentParam, SelfAssessmentContent, SelfAssessmentFilter,
            UpdateSelfAssessmentParam,
        },
        user::User,
    },
    service::self_assessment::SelfAssessmentService,
};
use entity::sea_orm_active_enums::{
    AssessmentPeriod, CompetencyLevel, SelfAssessmentStatus, UserRole,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod review;
mod submit;
mod update;

fn content(period: AssessmentPeriod) -> SelfAssessmentContent {
    SelfAssessmentContent {
        assessment_period: period,
        pedagogy_score: 4,
        classroom_score: 3,
        community_score: 3,
        professionalism_score: 5,
        pedagogy_reflection: None,
        classroom_reflection: None,
        community_reflection: None,
        professionalism_reflection: None,
        overall_level: CompetencyLevel::Good,
        strengths: None,
        areas_for_improvement: None,
        action_plan: None,
    }
}
