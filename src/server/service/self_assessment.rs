//! Teacher self-assessment service.
//!
//! Owns the DRAFT -> SUBMITTED -> REVIEWED workflow and the links between an
//! assessment and the teacher's portfolio items. Ownership means the assessment's
//! teacher is the caller's linked teacher.

use entity::sea_orm_active_enums::SelfAssessmentStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{evidence::EvidenceRepository, self_assessment::SelfAssessmentRepository},
    error::AppError,
    middleware::auth::Permission,
    model::{
        self_assessment::{
            CreateSelfAssessmentParam, SelfAssessment, SelfAssessmentFilter,
            UpdateSelfAssessmentParam,
        },
        user::User,
    },
    service::teacher::ensure_teacher_exists,
};

pub struct SelfAssessmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SelfAssessmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a DRAFT assessment and links the given portfolio items.
    ///
    /// The teacher comes from the request when given, otherwise from the caller's
    /// linked teacher. Only items owned by that teacher are linked; other ids are
    /// ignored.
    ///
    /// # Returns
    /// - `Ok(SelfAssessment)` - The new assessment with its linked items
    /// - `Err(AppError::BadRequest)` - No teacher in the request or on the caller
    /// - `Err(AppError::NotFound)` - The teacher does not exist
    pub async fn create(
        &self,
        caller: &User,
        param: CreateSelfAssessmentParam,
    ) -> Result<SelfAssessment, AppError> {
        let teacher_id = param
            .teacher_id
            .or(caller.teacher_id)
            .ok_or_else(|| AppError::BadRequest("Teacher profile is required".to_string()))?;
        ensure_teacher_exists(self.db, teacher_id).await?;

        let model = SelfAssessmentRepository::new(self.db)
            .create(teacher_id, param.content)
            .await?;
        self.link_items(model.id, teacher_id, &param.portfolio_item_ids)
            .await?;

        tracing::info!(
            "User {} created self-assessment {} for teacher {}",
            caller.id,
            model.id,
            teacher_id
        );

        self.with_items(model).await
    }

    /// Lists self-assessments newest first.
    ///
    /// Reviewers and managers may name any teacher; other callers always see their
    /// own teacher's assessments. A privileged caller with neither a requested nor a
    /// linked teacher sees every teacher's assessments.
    pub async fn get_all(
        &self,
        caller: &User,
        mut filter: SelfAssessmentFilter,
    ) -> Result<Vec<SelfAssessment>, AppError> {
        if Permission::Reviewer.allows(caller.role) {
            filter.teacher_id = filter.teacher_id.or(caller.teacher_id);
        } else {
            let teacher_id = caller
                .teacher_id
                .ok_or_else(|| AppError::BadRequest("Teacher profile is required".to_string()))?;
            filter.teacher_id = Some(teacher_id);
        }

        let models = SelfAssessmentRepository::new(self.db)
            .get_all(&filter)
            .await?;

        let mut assessments = Vec::with_capacity(models.len());
        for model in models {
            assessments.push(self.with_items(model).await?);
        }

        Ok(assessments)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SelfAssessment, AppError> {
        let model = self.find_model(id).await?;
        self.with_items(model).await
    }

    /// Updates an owned, not yet submitted assessment.
    ///
    /// When `portfolio_item_ids` is present, existing links are cleared and the new set
    /// is linked.
    pub async fn update(
        &self,
        caller: &User,
        param: UpdateSelfAssessmentParam,
    ) -> Result<SelfAssessment, AppError> {
        let existing = self.find_model(param.id).await?;

        if caller.teacher_id != Some(existing.teacher_id) {
            return Err(AppError::Forbidden(
                "You can only update your own assessments".to_string(),
            ));
        }
        if existing.status == SelfAssessmentStatus::Submitted {
            return Err(AppError::Forbidden(
                "Cannot update submitted assessment".to_string(),
            ));
        }

        let model = SelfAssessmentRepository::new(self.db)
            .update(&param)
            .await?
            .ok_or_else(|| not_found(param.id))?;

        if let Some(ids) = &param.portfolio_item_ids {
            EvidenceRepository::new(self.db)
                .unlink_self_assessment(model.id)
                .await?;
            self.link_items(model.id, model.teacher_id, ids).await?;
        }

        self.with_items(model).await
    }

    /// Moves an owned DRAFT assessment to SUBMITTED.
    pub async fn submit(&self, caller: &User, id: i32) -> Result<SelfAssessment, AppError> {
        let existing = self.find_model(id).await?;

        if caller.teacher_id != Some(existing.teacher_id) {
            return Err(AppError::Forbidden(
                "You can only submit your own assessments".to_string(),
            ));
        }
        if existing.status != SelfAssessmentStatus::Draft {
            return Err(AppError::Forbidden(
                "Only draft assessments can be submitted".to_string(),
            ));
        }

        let model = SelfAssessmentRepository::new(self.db)
            .mark_submitted(existing)
            .await?;

        tracing::info!("Self-assessment {} submitted by user {}", id, caller.id);

        self.with_items(model).await
    }

    /// Records a review on a SUBMITTED assessment.
    pub async fn review(
        &self,
        reviewer: &User,
        id: i32,
        comments: Option<String>,
    ) -> Result<SelfAssessment, AppError> {
        let existing = self.find_model(id).await?;

        if existing.status != SelfAssessmentStatus::Submitted {
            return Err(AppError::Forbidden(
                "Only submitted assessments can be reviewed".to_string(),
            ));
        }

        let model = SelfAssessmentRepository::new(self.db)
            .mark_reviewed(existing, reviewer.id, comments)
            .await?;

        tracing::info!("Self-assessment {} reviewed by user {}", id, reviewer.id);

        self.with_items(model).await
    }

    /// Deletes an owned assessment that has not been reviewed, unlinking its items first.
    pub async fn delete(&self, caller: &User, id: i32) -> Result<(), AppError> {
        let existing = self.find_model(id).await?;

        if caller.teacher_id != Some(existing.teacher_id) {
            return Err(AppError::Forbidden(
                "You can only delete your own assessments".to_string(),
            ));
        }
        if existing.status == SelfAssessmentStatus::Reviewed {
            return Err(AppError::Forbidden(
                "Cannot delete reviewed assessment".to_string(),
            ));
        }

        EvidenceRepository::new(self.db)
            .unlink_self_assessment(id)
            .await?;
        SelfAssessmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn find_model(&self, id: i32) -> Result<entity::self_assessment::Model, AppError> {
        SelfAssessmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Links the subset of `ids` owned by `teacher_id` to the assessment.
    async fn link_items(
        &self,
        self_assessment_id: i32,
        teacher_id: i32,
        ids: &[i32],
    ) -> Result<(), AppError> {
        let repo = EvidenceRepository::new(self.db);

        let owned = repo.owned_ids(teacher_id, ids).await?;
        if owned.len() < ids.len() {
            tracing::warn!(
                "Skipped {} portfolio items not owned by teacher {}",
                ids.len() - owned.len(),
                teacher_id
            );
        }
        repo.link_to_self_assessment(self_assessment_id, &owned)
            .await?;

        Ok(())
    }

    async fn with_items(
        &self,
        model: entity::self_assessment::Model,
    ) -> Result<SelfAssessment, AppError> {
        let items = EvidenceRepository::new(self.db)
            .get_by_self_assessment(model.id)
            .await?;

        Ok(SelfAssessment::from_entity(model, items))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Self-assessment with ID {} not found", id))
}
