//! Per-teacher evidence completeness against the indicator catalog.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        evidence::EvidenceRepository, indicator::IndicatorRepository,
        mentoring_visit::MentoringVisitRepository, plc_activity::PlcActivityRepository,
        reflective_journal::ReflectiveJournalRepository, teacher::TeacherRepository,
    },
    error::AppError,
    model::{
        completeness::{PassThreshold, TeacherCompleteness, TeacherRecords, PASS_THRESHOLDS},
        evidence::EvidenceFilter,
        user::User,
    },
};

pub struct CompletenessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompletenessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Thresholds for every round span, earliest first.
    pub fn pass_thresholds() -> Vec<PassThreshold> {
        PASS_THRESHOLDS.to_vec()
    }

    /// Scores a teacher's evidence for one assessment round.
    ///
    /// A TEACHER may only score their own record.
    ///
    /// # Returns
    /// - `Ok(TeacherCompleteness)` - Scores per indicator and aspect with pass criteria
    /// - `Err(AppError::Forbidden)` - A TEACHER asked for another teacher
    /// - `Err(AppError::NotFound)` - No teacher with that id
    pub async fn for_teacher(
        &self,
        caller: &User,
        teacher_id: i32,
        round: i32,
    ) -> Result<TeacherCompleteness, AppError> {
        if caller.role == UserRole::Teacher && caller.teacher_id != Some(teacher_id) {
            return Err(AppError::Forbidden(
                "You can only view your own completeness".to_string(),
            ));
        }

        self.evaluate(teacher_id, round).await
    }

    /// Scores the caller's linked teacher.
    pub async fn for_caller(
        &self,
        caller: &User,
        round: i32,
    ) -> Result<TeacherCompleteness, AppError> {
        let teacher_id = caller
            .teacher_id
            .ok_or_else(|| AppError::BadRequest("Teacher profile is required".to_string()))?;

        self.evaluate(teacher_id, round).await
    }

    async fn evaluate(&self, teacher_id: i32, round: i32) -> Result<TeacherCompleteness, AppError> {
        let teacher = TeacherRepository::new(self.db)
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Teacher with ID {} not found", teacher_id))
            })?;

        let catalog = IndicatorRepository::new(self.db).get_all(true).await?;
        let records = TeacherRecords {
            evidence: EvidenceRepository::new(self.db)
                .get_by_teacher(teacher_id, &EvidenceFilter::default())
                .await?,
            journals: ReflectiveJournalRepository::new(self.db)
                .get_all(Some(teacher_id), None)
                .await?,
            visits: MentoringVisitRepository::new(self.db)
                .get_by_teacher(teacher_id, None)
                .await?,
            plc_activity_count: PlcActivityRepository::new(self.db)
                .count_by_teacher(teacher_id)
                .await?,
        };

        let result =
            TeacherCompleteness::evaluate(teacher.id, teacher.full_name, round, &catalog, &records);

        tracing::debug!(
            "Completeness for teacher {} round {}: {}",
            teacher_id,
            round,
            result.score
        );

        Ok(result)
    }
}
