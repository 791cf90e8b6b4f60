//! Self-assessment factory.
//!
//! Defaults to a DRAFT with no submission or review metadata. Use `status` to start a
//! test from a later workflow state.

use chrono::Utc;
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel, SelfAssessmentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test self-assessments.
pub struct SelfAssessmentFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    assessment_period: AssessmentPeriod,
    status: SelfAssessmentStatus,
}

impl<'a> SelfAssessmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        Self {
            db,
            teacher_id,
            assessment_period: AssessmentPeriod::Before,
            status: SelfAssessmentStatus::Draft,
        }
    }

    pub fn assessment_period(mut self, period: AssessmentPeriod) -> Self {
        self.assessment_period = period;
        self
    }

    /// Sets the workflow status. SUBMITTED and REVIEWED also stamp `submitted_at`.
    pub fn status(mut self, status: SelfAssessmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the self-assessment.
    pub async fn build(self) -> Result<entity::self_assessment::Model, DbErr> {
        let now = Utc::now();
        let submitted_at = match self.status {
            SelfAssessmentStatus::Draft => None,
            _ => Some(now),
        };

        entity::self_assessment::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            assessment_period: ActiveValue::Set(self.assessment_period),
            pedagogy_score: ActiveValue::Set(3),
            classroom_score: ActiveValue::Set(3),
            community_score: ActiveValue::Set(3),
            professionalism_score: ActiveValue::Set(3),
            pedagogy_reflection: ActiveValue::Set(None),
            classroom_reflection: ActiveValue::Set(None),
            community_reflection: ActiveValue::Set(None),
            professionalism_reflection: ActiveValue::Set(None),
            overall_level: ActiveValue::Set(CompetencyLevel::Good),
            strengths: ActiveValue::Set(None),
            areas_for_improvement: ActiveValue::Set(None),
            action_plan: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            submitted_at: ActiveValue::Set(submitted_at),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            reviewer_comments: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a DRAFT self-assessment for the given teacher.
pub async fn create_self_assessment(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::self_assessment::Model, DbErr> {
    SelfAssessmentFactory::new(db, teacher_id).build().await
}
