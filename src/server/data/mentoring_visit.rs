//! Mentoring visit data repository.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Order, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::activity_by_teacher,
    model::{
        mentoring::{CreateMentoringVisitParam, MentoringFilter, MentoringVisit, UpdateMentoringVisitParam},
        ActivityTally,
    },
};

pub struct MentoringVisitRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentoringVisitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMentoringVisitParam) -> Result<MentoringVisit, DbErr> {
        let entity = entity::mentoring_visit::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            visit_date: ActiveValue::Set(param.visit_date),
            visit_type: ActiveValue::Set(param.visit_type),
            observer: ActiveValue::Set(param.observer),
            focus_area: ActiveValue::Set(param.focus_area),
            strengths: ActiveValue::Set(param.strengths),
            challenges: ActiveValue::Set(param.challenges),
            suggestions: ActiveValue::Set(param.suggestions),
            follow_up_required: ActiveValue::Set(param.follow_up_required),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MentoringVisit::from_entity(entity))
    }

    /// Finds a visit with its teacher summary.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MentoringVisit>, DbErr> {
        let result = entity::prelude::MentoringVisit::find_by_id(id)
            .find_also_related(entity::prelude::Teacher)
            .one(self.db)
            .await?;

        Ok(result.map(|(visit, teacher)| MentoringVisit::from_entity_with_teacher(visit, teacher)))
    }

    /// Gets a filtered page of visits, latest visit date first.
    ///
    /// # Returns
    /// - `Ok((visits, total))` - Visits for the requested page and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &MentoringFilter,
    ) -> Result<(Vec<MentoringVisit>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(teacher_id) = filter.teacher_id {
            condition = condition.add(entity::mentoring_visit::Column::TeacherId.eq(teacher_id));
        }
        if let Some(visit_type) = filter.visit_type {
            condition = condition.add(entity::mentoring_visit::Column::VisitType.eq(visit_type));
        }
        if let Some(start) = filter.start_date {
            condition = condition.add(entity::mentoring_visit::Column::VisitDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            condition = condition.add(entity::mentoring_visit::Column::VisitDate.lte(end));
        }

        let paginator = entity::prelude::MentoringVisit::find()
            .find_also_related(entity::prelude::Teacher)
            .filter(condition)
            .order_by_desc(entity::mentoring_visit::Column::VisitDate)
            .order_by_desc(entity::mentoring_visit::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page).await?;
        let visits = rows
            .into_iter()
            .map(|(visit, teacher)| MentoringVisit::from_entity_with_teacher(visit, teacher))
            .collect();

        Ok((visits, total))
    }

    /// Gets a teacher's visits, latest first, optionally limited.
    pub async fn get_by_teacher(
        &self,
        teacher_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<MentoringVisit>, DbErr> {
        let entities = entity::prelude::MentoringVisit::find()
            .filter(entity::mentoring_visit::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::mentoring_visit::Column::VisitDate)
            .order_by_desc(entity::mentoring_visit::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MentoringVisit::from_entity).collect())
    }

    /// Most recent visit of each listed teacher, by visit date.
    ///
    /// Each teacher's newest row is picked by a correlated subquery, so one query
    /// covers every teacher in `teacher_ids`.
    pub async fn latest_by_teachers(
        &self,
        teacher_ids: &[i32],
    ) -> Result<HashMap<i32, MentoringVisit>, DbErr> {
        let latest = Alias::new("latest");
        let newest_id = Query::select()
            .column((latest.clone(), entity::mentoring_visit::Column::Id))
            .from_as(entity::prelude::MentoringVisit, latest.clone())
            .and_where(
                Expr::col((latest.clone(), entity::mentoring_visit::Column::TeacherId)).equals((
                    entity::prelude::MentoringVisit,
                    entity::mentoring_visit::Column::TeacherId,
                )),
            )
                .order_by((latest.clone(), entity::mentoring_visit::Column::VisitDate), Order::Desc)
                .order_by((latest.clone(), entity::mentoring_visit::Column::Id), Order::Desc)
            .limit(1)
            .to_owned();

        let entities = entity::prelude::MentoringVisit::find()
            .filter(entity::mentoring_visit::Column::TeacherId.is_in(teacher_ids.iter().copied()))
            .filter(entity::mentoring_visit::Column::Id.in_subquery(newest_id))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.teacher_id, MentoringVisit::from_entity(entity)))
            .collect())
    }

    /// Gets the most recent visits across all teachers with the teacher attached.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<MentoringVisit>, DbErr> {
        let rows = entity::prelude::MentoringVisit::find()
            .find_also_related(entity::prelude::Teacher)
            .order_by_desc(entity::mentoring_visit::Column::VisitDate)
            .order_by_desc(entity::mentoring_visit::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(visit, teacher)| MentoringVisit::from_entity_with_teacher(visit, teacher))
            .collect())
    }

    pub async fn update(
        &self,
        param: UpdateMentoringVisitParam,
    ) -> Result<Option<MentoringVisit>, DbErr> {
        let Some(existing) = entity::prelude::MentoringVisit::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::mentoring_visit::ActiveModel = existing.into();
        if let Some(visit_date) = param.visit_date {
            active.visit_date = ActiveValue::Set(visit_date);
        }
        if let Some(visit_type) = param.visit_type {
            active.visit_type = ActiveValue::Set(visit_type);
        }
        if let Some(observer) = param.observer {
            active.observer = ActiveValue::Set(observer);
        }
        if let Some(focus_area) = param.focus_area {
            active.focus_area = ActiveValue::Set(focus_area);
        }
        if let Some(strengths) = param.strengths {
            active.strengths = ActiveValue::Set(Some(strengths));
        }
        if let Some(challenges) = param.challenges {
            active.challenges = ActiveValue::Set(Some(challenges));
        }
        if let Some(suggestions) = param.suggestions {
            active.suggestions = ActiveValue::Set(Some(suggestions));
        }
        if let Some(follow_up_required) = param.follow_up_required {
            active.follow_up_required = ActiveValue::Set(follow_up_required);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(MentoringVisit::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MentoringVisit::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MentoringVisit::delete_many()
            .filter(entity::mentoring_visit::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::MentoringVisit::find().count(self.db).await
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MentoringVisit::find()
            .filter(entity::mentoring_visit::Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await
    }

    /// Count and latest visit date per teacher.
    pub async fn activity_by_teacher(
        &self,
        teacher_ids: Option<&[i32]>,
    ) -> Result<HashMap<i32, ActivityTally>, DbErr> {
        activity_by_teacher::<entity::prelude::MentoringVisit, _, _>(
            self.db,
            entity::mentoring_visit::Column::TeacherId,
            entity::mentoring_visit::Column::VisitDate,
            teacher_ids,
            |date: NaiveDate| date,
        )
        .await
    }

    /// Visit counts per visit date on or after `since`.
    pub async fn counts_by_date_since(
        &self,
        since: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, DbErr> {
        entity::prelude::MentoringVisit::find()
            .select_only()
            .column(entity::mentoring_visit::Column::VisitDate)
            .column_as(entity::mentoring_visit::Column::Id.count(), "count")
            .filter(entity::mentoring_visit::Column::VisitDate.gte(since))
            .group_by(entity::mentoring_visit::Column::VisitDate)
            .into_tuple()
            .all(self.db)
            .await
    }
}
