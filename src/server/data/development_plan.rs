//! Development plan (IDP) data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::activity_by_teacher,
    model::{
        assessment::{CreateDevelopmentPlanParam, DevelopmentPlan, UpdateDevelopmentPlanParam},
        ActivityTally,
    },
};

pub struct DevelopmentPlanRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DevelopmentPlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDevelopmentPlanParam) -> Result<DevelopmentPlan, DbErr> {
        let now = Utc::now();
        let entity = entity::development_plan::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            focus_competency: ActiveValue::Set(param.focus_competency),
            action_plan: ActiveValue::Set(param.action_plan),
            support_type: ActiveValue::Set(param.support_type),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            progress_status: ActiveValue::Set(param.progress_status),
            progress_notes: ActiveValue::Set(param.progress_notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DevelopmentPlan::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DevelopmentPlan>, DbErr> {
        let entity = entity::prelude::DevelopmentPlan::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DevelopmentPlan::from_entity))
    }

    /// Gets plans newest first, optionally for one teacher.
    pub async fn get_all(&self, teacher_id: Option<i32>) -> Result<Vec<DevelopmentPlan>, DbErr> {
        let mut query = entity::prelude::DevelopmentPlan::find();
        if let Some(teacher_id) = teacher_id {
            query = query.filter(entity::development_plan::Column::TeacherId.eq(teacher_id));
        }

        let entities = query
            .order_by_desc(entity::development_plan::Column::CreatedAt)
            .order_by_desc(entity::development_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DevelopmentPlan::from_entity).collect())
    }

    /// Applies a partial update. Date ordering is the caller's concern.
    pub async fn update(
        &self,
        param: UpdateDevelopmentPlanParam,
    ) -> Result<Option<DevelopmentPlan>, DbErr> {
        let Some(existing) = entity::prelude::DevelopmentPlan::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::development_plan::ActiveModel = existing.into();
        if let Some(focus_competency) = param.focus_competency {
            active.focus_competency = ActiveValue::Set(focus_competency);
        }
        if let Some(action_plan) = param.action_plan {
            active.action_plan = ActiveValue::Set(action_plan);
        }
        if let Some(support_type) = param.support_type {
            active.support_type = ActiveValue::Set(support_type);
        }
        if let Some(start_date) = param.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = param.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(progress_status) = param.progress_status {
            active.progress_status = ActiveValue::Set(progress_status);
        }
        if let Some(progress_notes) = param.progress_notes {
            active.progress_notes = ActiveValue::Set(Some(progress_notes));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(DevelopmentPlan::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DevelopmentPlan::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DevelopmentPlan::delete_many()
            .filter(entity::development_plan::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Count and latest creation date per teacher.
    pub async fn activity_by_teacher(
        &self,
        teacher_ids: Option<&[i32]>,
    ) -> Result<HashMap<i32, ActivityTally>, DbErr> {
        activity_by_teacher::<entity::prelude::DevelopmentPlan, _, _>(
            self.db,
            entity::development_plan::Column::TeacherId,
            entity::development_plan::Column::CreatedAt,
            teacher_ids,
            |at: DateTime<Utc>| at.date_naive(),
        )
        .await
    }
}
