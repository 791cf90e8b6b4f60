//! Competency assessment and development plan service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        competency_assessment::CompetencyAssessmentRepository,
        development_plan::DevelopmentPlanRepository,
    },
    error::AppError,
    model::assessment::{
        CompetencyAssessment, CreateCompetencyAssessmentParam, CreateDevelopmentPlanParam,
        DevelopmentPlan, UpdateCompetencyAssessmentParam, UpdateDevelopmentPlanParam,
    },
    service::teacher::ensure_teacher_exists,
    util::parse::validate_date_range,
};

pub struct AssessmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssessmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists competency assessments newest first, optionally for one teacher.
    pub async fn get_competencies(
        &self,
        teacher_id: Option<i32>,
    ) -> Result<Vec<CompetencyAssessment>, AppError> {
        Ok(CompetencyAssessmentRepository::new(self.db)
            .get_all(teacher_id)
            .await?)
    }

    pub async fn get_competency(&self, id: i32) -> Result<CompetencyAssessment, AppError> {
        CompetencyAssessmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| assessment_not_found(id))
    }

    /// Records a competency assessment for an existing teacher.
    pub async fn create_competency(
        &self,
        param: CreateCompetencyAssessmentParam,
    ) -> Result<CompetencyAssessment, AppError> {
        ensure_teacher_exists(self.db, param.teacher_id).await?;

        let repo = CompetencyAssessmentRepository::new(self.db);
        let created = repo.create(param).await?;

        repo.find_by_id(created.id)
            .await?
            .ok_or_else(|| assessment_not_found(created.id))
    }

    pub async fn update_competency(
        &self,
        param: UpdateCompetencyAssessmentParam,
    ) -> Result<CompetencyAssessment, AppError> {
        let id = param.id;

        CompetencyAssessmentRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| assessment_not_found(id))
    }

    pub async fn delete_competency(&self, id: i32) -> Result<(), AppError> {
        if !CompetencyAssessmentRepository::new(self.db).delete(id).await? {
            return Err(assessment_not_found(id));
        }
        Ok(())
    }

    /// Lists development plans newest first, optionally for one teacher.
    pub async fn get_plans(&self, teacher_id: Option<i32>) -> Result<Vec<DevelopmentPlan>, AppError> {
        Ok(DevelopmentPlanRepository::new(self.db)
            .get_all(teacher_id)
            .await?)
    }

    pub async fn get_plan(&self, id: i32) -> Result<DevelopmentPlan, AppError> {
        DevelopmentPlanRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    pub async fn create_plan(
        &self,
        param: CreateDevelopmentPlanParam,
    ) -> Result<DevelopmentPlan, AppError> {
        ensure_teacher_exists(self.db, param.teacher_id).await?;

        Ok(DevelopmentPlanRepository::new(self.db).create(param).await?)
    }

    /// Applies a partial plan update.
    ///
    /// The resulting date range is checked against the stored dates, so moving only
    /// one end of the range cannot invert it.
    pub async fn update_plan(
        &self,
        param: UpdateDevelopmentPlanParam,
    ) -> Result<DevelopmentPlan, AppError> {
        let repo = DevelopmentPlanRepository::new(self.db);
        let id = param.id;

        let existing = repo.find_by_id(id).await?.ok_or_else(|| plan_not_found(id))?;
        validate_date_range(
            param.start_date.unwrap_or(existing.start_date),
            param.end_date.unwrap_or(existing.end_date),
        )?;

        repo.update(param).await?.ok_or_else(|| plan_not_found(id))
    }

    pub async fn delete_plan(&self, id: i32) -> Result<(), AppError> {
        if !DevelopmentPlanRepository::new(self.db).delete(id).await? {
            return Err(plan_not_found(id));
        }
        Ok(())
    }
}

fn assessment_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Assessment with ID {} not found", id))
}

fn plan_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Development plan with ID {} not found", id))
}
