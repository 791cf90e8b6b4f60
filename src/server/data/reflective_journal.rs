//! Reflective journal data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::activity_by_teacher,
    model::{
        journal::{CreateJournalParam, Journal, UpdateJournalParam},
        ActivityTally,
    },
};

pub struct ReflectiveJournalRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReflectiveJournalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateJournalParam) -> Result<Journal, DbErr> {
        let now = Utc::now();
        let entity = entity::reflective_journal::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            month: ActiveValue::Set(param.month),
            reflection_text: ActiveValue::Set(param.reflection_text),
            success_story: ActiveValue::Set(param.success_story),
            difficulty: ActiveValue::Set(param.difficulty),
            support_request: ActiveValue::Set(param.support_request),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Journal::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Journal>, DbErr> {
        let entity = entity::prelude::ReflectiveJournal::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Journal::from_entity))
    }

    /// Whether the teacher already has a journal for `month`.
    ///
    /// # Arguments
    /// - `exclude_id` - Journal being updated, ignored in the check
    pub async fn month_taken(
        &self,
        teacher_id: i32,
        month: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::ReflectiveJournal::find()
            .filter(entity::reflective_journal::Column::TeacherId.eq(teacher_id))
            .filter(entity::reflective_journal::Column::Month.eq(month));
        if let Some(id) = exclude_id {
            query = query.filter(entity::reflective_journal::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets journals, latest month first, optionally for one teacher and limited.
    pub async fn get_all(
        &self,
        teacher_id: Option<i32>,
        limit: Option<u64>,
    ) -> Result<Vec<Journal>, DbErr> {
        let mut query = entity::prelude::ReflectiveJournal::find();
        if let Some(teacher_id) = teacher_id {
            query = query.filter(entity::reflective_journal::Column::TeacherId.eq(teacher_id));
        }

        let entities = query
            .order_by_desc(entity::reflective_journal::Column::Month)
            .order_by_desc(entity::reflective_journal::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Journal::from_entity).collect())
    }

    /// Gets the most recently written journals with the author's name.
    pub async fn get_recent_with_teacher_name(
        &self,
        limit: u64,
    ) -> Result<Vec<(Journal, Option<String>)>, DbErr> {
        let rows = entity::prelude::ReflectiveJournal::find()
            .find_also_related(entity::prelude::Teacher)
            .order_by_desc(entity::reflective_journal::Column::CreatedAt)
            .order_by_desc(entity::reflective_journal::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(journal, teacher)| (Journal::from_entity(journal), teacher.map(|t| t.full_name)))
            .collect())
    }

    pub async fn update(&self, param: UpdateJournalParam) -> Result<Option<Journal>, DbErr> {
        let Some(existing) = entity::prelude::ReflectiveJournal::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reflective_journal::ActiveModel = existing.into();
        if let Some(month) = param.month {
            active.month = ActiveValue::Set(month);
        }
        if let Some(reflection_text) = param.reflection_text {
            active.reflection_text = ActiveValue::Set(reflection_text);
        }
        if let Some(success_story) = param.success_story {
            active.success_story = ActiveValue::Set(Some(success_story));
        }
        if let Some(difficulty) = param.difficulty {
            active.difficulty = ActiveValue::Set(Some(difficulty));
        }
        if let Some(support_request) = param.support_request {
            active.support_request = ActiveValue::Set(Some(support_request));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Journal::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ReflectiveJournal::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ReflectiveJournal::delete_many()
            .filter(entity::reflective_journal::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ReflectiveJournal::find().count(self.db).await
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ReflectiveJournal::find()
            .filter(entity::reflective_journal::Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await
    }

    /// Count and latest journal date per teacher.
    pub async fn activity_by_teacher(
        &self,
        teacher_ids: Option<&[i32]>,
    ) -> Result<HashMap<i32, ActivityTally>, DbErr> {
        activity_by_teacher::<entity::prelude::ReflectiveJournal, _, _>(
            self.db,
            entity::reflective_journal::Column::TeacherId,
            entity::reflective_journal::Column::CreatedAt,
            teacher_ids,
            |at: DateTime<Utc>| at.date_naive(),
        )
        .await
    }

    /// Journal counts per month from `since_month` (`YYYY-MM`) onward.
    pub async fn counts_by_month_since(
        &self,
        since_month: &str,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::ReflectiveJournal::find()
            .select_only()
            .column(entity::reflective_journal::Column::Month)
            .column_as(entity::reflective_journal::Column::Id.count(), "count")
            .filter(entity::reflective_journal::Column::Month.gte(since_month))
            .group_by(entity::reflective_journal::Column::Month)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn count_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::ReflectiveJournal::find()
            .filter(entity::reflective_journal::Column::CreatedAt.lt(cutoff))
            .count(self.db)
            .await
    }

    pub async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ReflectiveJournal::delete_many()
            .filter(entity::reflective_journal::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
