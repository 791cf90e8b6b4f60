//! PLC activity data repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{BTreeMap, HashMap};

use crate::server::{
    data::activity_by_teacher,
    model::{
        plc::{CreatePlcActivityParam, PlcActivity, PlcFilter, PlcGroupCount, UpdatePlcActivityParam},
        ActivityTally,
    },
};

pub struct PlcActivityRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlcActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePlcActivityParam) -> Result<PlcActivity, DbErr> {
        let entity = entity::plc_activity::ActiveModel {
            teacher_id: ActiveValue::Set(param.teacher_id),
            plc_date: ActiveValue::Set(param.plc_date),
            plc_level: ActiveValue::Set(param.plc_level),
            topic: ActiveValue::Set(param.topic),
            role: ActiveValue::Set(param.role),
            takeaway: ActiveValue::Set(param.takeaway),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlcActivity::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<PlcActivity>, DbErr> {
        let entity = entity::prelude::PlcActivity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PlcActivity::from_entity))
    }

    /// Gets a filtered page of activities, latest PLC date first.
    pub async fn get_paginated(
        &self,
        filter: &PlcFilter,
    ) -> Result<(Vec<PlcActivity>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(teacher_id) = filter.teacher_id {
            condition = condition.add(entity::plc_activity::Column::TeacherId.eq(teacher_id));
        }
        if let Some(plc_level) = &filter.plc_level {
            condition = condition.add(entity::plc_activity::Column::PlcLevel.eq(plc_level.as_str()));
        }
        if let Some(start) = filter.start_date {
            condition = condition.add(entity::plc_activity::Column::PlcDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            condition = condition.add(entity::plc_activity::Column::PlcDate.lte(end));
        }

        let paginator = entity::prelude::PlcActivity::find()
            .filter(condition)
            .order_by_desc(entity::plc_activity::Column::PlcDate)
            .order_by_desc(entity::plc_activity::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page).await?;

        Ok((
            entities.into_iter().map(PlcActivity::from_entity).collect(),
            total,
        ))
    }

    /// Gets a teacher's activities, latest first, optionally limited.
    pub async fn get_by_teacher(
        &self,
        teacher_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<PlcActivity>, DbErr> {
        let entities = entity::prelude::PlcActivity::find()
            .filter(entity::plc_activity::Column::TeacherId.eq(teacher_id))
            .order_by_desc(entity::plc_activity::Column::PlcDate)
            .order_by_desc(entity::plc_activity::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlcActivity::from_entity).collect())
    }

    /// Counts activities per PLC level, ordered by level.
    pub async fn count_by_level(&self) -> Result<Vec<PlcGroupCount>, DbErr> {
        let levels: Vec<String> = entity::prelude::PlcActivity::find()
            .select_only()
            .column(entity::plc_activity::Column::PlcLevel)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for level in levels {
            *counts.entry(level).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(plc_level, count)| PlcGroupCount { plc_level, count })
            .collect())
    }

    pub async fn update(
        &self,
        param: UpdatePlcActivityParam,
    ) -> Result<Option<PlcActivity>, DbErr> {
        let Some(existing) = entity::prelude::PlcActivity::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::plc_activity::ActiveModel = existing.into();
        if let Some(plc_date) = param.plc_date {
            active.plc_date = ActiveValue::Set(plc_date);
        }
        if let Some(plc_level) = param.plc_level {
            active.plc_level = ActiveValue::Set(plc_level);
        }
        if let Some(topic) = param.topic {
            active.topic = ActiveValue::Set(topic);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role);
        }
        if let Some(takeaway) = param.takeaway {
            active.takeaway = ActiveValue::Set(Some(takeaway));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(PlcActivity::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlcActivity::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlcActivity::delete_many()
            .filter(entity::plc_activity::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::PlcActivity::find().count(self.db).await
    }

    pub async fn count_by_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PlcActivity::find()
            .filter(entity::plc_activity::Column::TeacherId.eq(teacher_id))
            .count(self.db)
            .await
    }

    /// Count and latest activity date per teacher.
    pub async fn activity_by_teacher(
        &self,
        teacher_ids: Option<&[i32]>,
    ) -> Result<HashMap<i32, ActivityTally>, DbErr> {
        activity_by_teacher::<entity::prelude::PlcActivity, _, _>(
            self.db,
            entity::plc_activity::Column::TeacherId,
            entity::plc_activity::Column::PlcDate,
            teacher_ids,
            |date: NaiveDate| date,
        )
        .await
    }

    /// Activity counts per PLC date on or after `since`.
    pub async fn counts_by_date_since(
        &self,
        since: NaiveDate,
    ) -> Result<Vec<(NaiveDate, i64)>, DbErr> {
        entity::prelude::PlcActivity::find()
            .select_only()
            .column(entity::plc_activity::Column::PlcDate)
            .column_as(entity::plc_activity::Column::Id.count(), "count")
            .filter(entity::plc_activity::Column::PlcDate.gte(since))
            .group_by(entity::plc_activity::Column::PlcDate)
            .into_tuple()
            .all(self.db)
            .await
    }
}
