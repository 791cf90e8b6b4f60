//! Self-assessment data repository.
//!
//! Returns raw entity models; the service attaches linked evidence items before
//! converting to the domain model, since those come from the evidence repository.

use chrono::Utc;
use entity::sea_orm_active_enums::SelfAssessmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::self_assessment::{
    SelfAssessmentContent, SelfAssessmentFilter, UpdateSelfAssessmentParam,
};

pub struct SelfAssessmentRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SelfAssessmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a DRAFT self-assessment for the teacher.
    pub async fn create(
        &self,
        teacher_id: i32,
        content: SelfAssessmentContent,
    ) -> Result<entity::self_assessment::Model, DbErr> {
        let now = Utc::now();
        entity::self_assessment::ActiveModel {
            teacher_id: ActiveValue::Set(teacher_id),
            assessment_period: ActiveValue::Set(content.assessment_period),
            pedagogy_score: ActiveValue::Set(content.pedagogy_score),
            classroom_score: ActiveValue::Set(content.classroom_score),
            community_score: ActiveValue::Set(content.community_score),
            professionalism_score: ActiveValue::Set(content.professionalism_score),
            pedagogy_reflection: ActiveValue::Set(content.pedagogy_reflection),
            classroom_reflection: ActiveValue::Set(content.classroom_reflection),
            community_reflection: ActiveValue::Set(content.community_reflection),
            professionalism_reflection: ActiveValue::Set(content.professionalism_reflection),
            overall_level: ActiveValue::Set(content.overall_level),
            strengths: ActiveValue::Set(content.strengths),
            areas_for_improvement: ActiveValue::Set(content.areas_for_improvement),
            action_plan: ActiveValue::Set(content.action_plan),
            status: ActiveValue::Set(SelfAssessmentStatus::Draft),
            submitted_at: ActiveValue::Set(None),
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

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::self_assessment::Model>, DbErr> {
        entity::prelude::SelfAssessment::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets self-assessments newest first, narrowed by the filter.
    pub async fn get_all(
        &self,
        filter: &SelfAssessmentFilter,
    ) -> Result<Vec<entity::self_assessment::Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(teacher_id) = filter.teacher_id {
            condition = condition.add(entity::self_assessment::Column::TeacherId.eq(teacher_id));
        }
        if let Some(period) = filter.period {
            condition = condition.add(entity::self_assessment::Column::AssessmentPeriod.eq(period));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::self_assessment::Column::Status.eq(status));
        }

        entity::prelude::SelfAssessment::find()
            .filter(condition)
            .order_by_desc(entity::self_assessment::Column::CreatedAt)
            .order_by_desc(entity::self_assessment::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial content update. Portfolio links are handled separately.
    pub async fn update(
        &self,
        param: &UpdateSelfAssessmentParam,
    ) -> Result<Option<entity::self_assessment::Model>, DbErr> {
        let Some(existing) = entity::prelude::SelfAssessment::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::self_assessment::ActiveModel = existing.into();
        if let Some(period) = param.assessment_period {
            active.assessment_period = ActiveValue::Set(period);
        }
        if let Some(score) = param.pedagogy_score {
            active.pedagogy_score = ActiveValue::Set(score);
        }
        if let Some(score) = param.classroom_score {
            active.classroom_score = ActiveValue::Set(score);
        }
        if let Some(score) = param.community_score {
            active.community_score = ActiveValue::Set(score);
        }
        if let Some(score) = param.professionalism_score {
            active.professionalism_score = ActiveValue::Set(score);
        }
        if let Some(text) = &param.pedagogy_reflection {
            active.pedagogy_reflection = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(text) = &param.classroom_reflection {
            active.classroom_reflection = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(text) = &param.community_reflection {
            active.community_reflection = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(text) = &param.professionalism_reflection {
            active.professionalism_reflection = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(level) = param.overall_level {
            active.overall_level = ActiveValue::Set(level);
        }
        if let Some(text) = &param.strengths {
            active.strengths = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(text) = &param.areas_for_improvement {
            active.areas_for_improvement = ActiveValue::Set(Some(text.clone()));
        }
        if let Some(text) = &param.action_plan {
            active.action_plan = ActiveValue::Set(Some(text.clone()));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await.map(Some)
    }

    /// Moves a DRAFT assessment to SUBMITTED.
    pub async fn mark_submitted(
        &self,
        model: entity::self_assessment::Model,
    ) -> Result<entity::self_assessment::Model, DbErr> {
        let now = Utc::now();
        let mut active: entity::self_assessment::ActiveModel = model.into();
        active.status = ActiveValue::Set(SelfAssessmentStatus::Submitted);
        active.submitted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await
    }

    /// Moves a SUBMITTED assessment to REVIEWED.
    pub async fn mark_reviewed(
        &self,
        model: entity::self_assessment::Model,
        reviewer_id: i32,
        comments: Option<String>,
    ) -> Result<entity::self_assessment::Model, DbErr> {
        let now = Utc::now();
        let mut active: entity::self_assessment::ActiveModel = model.into();
        active.status = ActiveValue::Set(SelfAssessmentStatus::Reviewed);
        active.reviewed_by = ActiveValue::Set(Some(reviewer_id));
        active.reviewed_at = ActiveValue::Set(Some(now));
        active.reviewer_comments = ActiveValue::Set(comments);
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SelfAssessment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SelfAssessment::delete_many()
            .filter(entity::self_assessment::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
