//! Competency assessment data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Order, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::activity_by_teacher,
    model::{
        assessment::{CompetencyAssessment, CreateCompetencyAssessmentParam, UpdateCompetencyAssessmentParam},
        ActivityTally,
    },
};

pub struct CompetencyAssessmentRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetencyAssessmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateCompetencyAssessmentParam,
    ) -> Result<CompetencyAssessment, DbErr> {
        let entity = entity::competency_assessment::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            assessment_period: ActiveValue::Set(param.assessment_period),
            pedagogy_score: ActiveValue::Set(param.pedagogy_score),
            classroom_score: ActiveValue::Set(param.classroom_score),
            community_score: ActiveValue::Set(param.community_score),
            professionalism_score: ActiveValue::Set(param.professionalism_score),
            overall_level: ActiveValue::Set(param.overall_level),
            assessor: ActiveValue::Set(param.assessor),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CompetencyAssessment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CompetencyAssessment>, DbErr> {
        let result = entity::prelude::CompetencyAssessment::find_by_id(id)
            .find_also_related(entity::prelude::Teacher)
            .one(self.db)
            .await?;

        Ok(result.map(|(assessment, teacher)| {
            CompetencyAssessment::from_entity_with_teacher(assessment, teacher)
        }))
    }

    /// Gets assessments newest first, optionally for one teacher, each with its teacher.
    pub async fn get_all(
        &self,
        teacher_id: Option<i32>,
    ) -> Result<Vec<CompetencyAssessment>, DbErr> {
        let mut query = entity::prelude::CompetencyAssessment::find()
            .find_also_related(entity::prelude::Teacher);
        if let Some(teacher_id) = teacher_id {
            query = query.filter(entity::competency_assessment::Column::TeacherId.eq(teacher_id));
        }

        let rows = query
            .order_by_desc(entity::competency_assessment::Column::CreatedAt)
            .order_by_desc(entity::competency_assessment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(assessment, teacher)| {
                CompetencyAssessment::from_entity_with_teacher(assessment, teacher)
            })
            .collect())
    }

    /// Gets a teacher's assessments newest first, without the teacher attached.
    pub async fn get_by_teacher(&self, teacher_id: i32) -> Result<Vec<CompetencyAssessment>, DbErr> {
        let entities = entity::prelude::CompetencyAssessment::find()
            .filter(entity::competency_assessment::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::competency_assessment::Column::CreatedAt)
            .order_by_desc(entity::competency_assessment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(CompetencyAssessment::from_entity)
            .collect())
    }

    pub async fn find_latest_by_teacher(
        &self,
        teacher_id: i32,
    ) -> Result<Option<CompetencyAssessment>, DbErr> {
        let entity = entity::prelude::CompetencyAssessment::find()
            .filter(entity::competency_assessment::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::competency_assessment::Column::CreatedAt)
            .order_by_desc(entity::competency_assessment::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(CompetencyAssessment::from_entity))
    }

    /// Most recent assessment of each listed teacher.
    ///
    /// Each teacher's newest row is picked by a correlated subquery, so one query
    /// covers every teacher in `teacher_ids`.
    pub async fn latest_by_teachers(
        &self,
        teacher_ids: &[i32],
    ) -> Result<HashMap<i32, CompetencyAssessment>, DbErr> {
        let latest = Alias::new("latest");
        let newest_id = Query::select()
            .column((latest.clone(), entity::competency_assessment::Column::Id))
            .from_as(entity::prelude::CompetencyAssessment, latest.clone())
            .and_where(
                Expr::col((latest.clone(), entity::competency_assessment::Column::TeacherId)).equals((
                    entity::prelude::CompetencyAssessment,
                    entity::competency_assessment::Column::TeacherId,
                )),
            )
                .order_by((latest.clone(), entity::competency_assessment::Column::CreatedAt), Order::Desc)
                .order_by((latest.clone(), entity::competency_assessment::Column::Id), Order::Desc)
            .limit(1)
            .to_owned();

        let entities = entity::prelude::CompetencyAssessment::find()
            .filter(entity::competency_assessment::Column::TeacherId.is_in(teacher_ids.iter().copied()))
            .filter(entity::competency_assessment::Column::Id.in_subquery(newest_id))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.teacher_id, CompetencyAssessment::from_entity(entity)))
            .collect())
    }

    pub async fn update(
        &self,
        param: UpdateCompetencyAssessmentParam,
    ) -> Result<Option<CompetencyAssessment>, DbErr> {
        let Some(existing) = entity::prelude::CompetencyAssessment::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::competency_assessment::ActiveModel = existing.into();
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
        if let Some(level) = param.overall_level {
            active.overall_level = ActiveValue::Set(level);
        }
        if let Some(assessor) = param.assessor {
            active.assessor = ActiveValue::Set(assessor);
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(CompetencyAssessment::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CompetencyAssessment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetencyAssessment::delete_many()
            .filter(entity::competency_assessment::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CompetencyAssessment::find()
            .count(self.db)
            .await
    }

    /// Count and latest assessment date per teacher.
    pub async fn activity_by_teacher(
        &self,
        teacher_ids: Option<&[i32]>,
    ) -> Result<HashMap<i32, ActivityTally>, DbErr> {
        activity_by_teacher::<entity::prelude::CompetencyAssessment, _, _>(
            self.db,
            entity::competency_assessment::Column::TeacherId,
            entity::competency_assessment::Column::CreatedAt,
            teacher_ids,
            |at: DateTime<Utc>| at.date_naive(),
        )
        .await
    }

    pub async fn count_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::CompetencyAssessment::find()
            .filter(entity::competency_assessment::Column::CreatedAt.lt(cutoff))
            .count(self.db)
            .await
    }

    pub async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::CompetencyAssessment::delete_many()
            .filter(entity::competency_assessment::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
