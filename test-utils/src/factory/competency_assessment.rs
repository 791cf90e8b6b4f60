//! Competency assessment factory.

use chrono::Utc;
use entity::sea_orm_active_enums::{AssessmentPeriod, CompetencyLevel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test competency assessments.
///
/// All four scores default to 3 with an overall level of GOOD.
pub struct CompetencyAssessmentFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    assessment_period: AssessmentPeriod,
    scores: [i32; 4],
    overall_level: CompetencyLevel,
}

impl<'a> CompetencyAssessmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        Self {
            db,
            teacher_id,
            assessment_period: AssessmentPeriod::Before,
            scores: [3, 3, 3, 3],
            overall_level: CompetencyLevel::Good,
        }
    }

    pub fn assessment_period(mut self, period: AssessmentPeriod) -> Self {
        self.assessment_period = period;
        self
    }

    /// Sets pedagogy, classroom, community, and professionalism scores in that order.
    pub fn scores(mut self, scores: [i32; 4]) -> Self {
        self.scores = scores;
        self
    }

    pub fn overall_level(mut self, level: CompetencyLevel) -> Self {
        self.overall_level = level;
        self
    }

    /// Builds and inserts the assessment.
    pub async fn build(self) -> Result<entity::competency_assessment::Model, DbErr> {
        let [pedagogy, classroom, community, professionalism] = self.scores;
        entity::competency_assessment::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            assessment_period: ActiveValue::Set(self.assessment_period),
            pedagogy_score: ActiveValue::Set(pedagogy),
            classroom_score: ActiveValue::Set(classroom),
            community_score: ActiveValue::Set(community),
            professionalism_score: ActiveValue::Set(professionalism),
            overall_level: ActiveValue::Set(self.overall_level),
            assessor: ActiveValue::Set("Assessor A".to_string()),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assessment with default values for the given teacher.
pub async fn create_competency_assessment(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::competency_assessment::Model, DbErr> {
    CompetencyAssessmentFactory::new(db, teacher_id).build().await
}
