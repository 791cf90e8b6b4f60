//! School data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::school::{
    CreateSchoolParam, School, SchoolFilter, SchoolWithTeacherCount, UpdateSchoolParam,
};

pub struct SchoolRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SchoolRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSchoolParam) -> Result<School, DbErr> {
        let now = Utc::now();
        let entity = entity::school::ActiveModel {
            school_name: ActiveValue::Set(param.school_name),
            province: ActiveValue::Set(param.province),
            region: ActiveValue::Set(param.region),
            school_size: ActiveValue::Set(param.school_size),
            area_type: ActiveValue::Set(param.area_type),
            student_total: ActiveValue::Set(param.student_total),
            director_name: ActiveValue::Set(param.director_name),
            quality_school_flag: ActiveValue::Set(param.quality_school_flag),
            community_context: ActiveValue::Set(param.community_context),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(School::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<School>, DbErr> {
        let entity = entity::prelude::School::find_by_id(id).one(self.db).await?;

        Ok(entity.map(School::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::School::find()
            .filter(entity::school::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a filtered page of schools ordered by name, each with its teacher count.
    ///
    /// `search` matches a substring of the school name, province, or director name.
    ///
    /// # Returns
    /// - `Ok((schools, total))` - Schools for the requested page and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &SchoolFilter,
    ) -> Result<(Vec<SchoolWithTeacherCount>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::school::Column::SchoolName.contains(search))
                    .add(entity::school::Column::Province.contains(search))
                    .add(entity::school::Column::DirectorName.contains(search)),
            );
        }
        if let Some(region) = filter.region {
            condition = condition.add(entity::school::Column::Region.eq(region));
        }
        if let Some(province) = &filter.province {
            condition = condition.add(entity::school::Column::Province.eq(province.as_str()));
        }
        if let Some(school_size) = &filter.school_size {
            condition = condition.add(entity::school::Column::SchoolSize.eq(school_size.as_str()));
        }
        if let Some(area_type) = &filter.area_type {
            condition = condition.add(entity::school::Column::AreaType.eq(area_type.as_str()));
        }

        let paginator = entity::prelude::School::find()
            .filter(condition)
            .order_by_asc(entity::school::Column::SchoolName)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page).await?;

        let school_ids: Vec<i32> = entities.iter().map(|s| s.id).collect();
        let counts = self.teacher_counts(school_ids).await?;

        let schools = entities
            .into_iter()
            .map(|entity| {
                let teacher_count = counts.get(&entity.id).copied().unwrap_or(0);
                SchoolWithTeacherCount {
                    school: School::from_entity(entity),
                    teacher_count,
                }
            })
            .collect();

        Ok((schools, total))
    }

    /// Counts teachers per school for the given schools.
    async fn teacher_counts(&self, school_ids: Vec<i32>) -> Result<HashMap<i32, u64>, DbErr> {
        if school_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<i32> = entity::prelude::Teacher::find()
            .select_only()
            .column(entity::teacher::Column::SchoolId)
            .filter(entity::teacher::Column::SchoolId.is_in(school_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for school_id in rows {
            *counts.entry(school_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(School))` - The updated school
    /// - `Ok(None)` - No school with that id
    pub async fn update(&self, param: UpdateSchoolParam) -> Result<Option<School>, DbErr> {
        let Some(existing) = entity::prelude::School::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::school::ActiveModel = existing.into();
        if let Some(school_name) = param.school_name {
            active.school_name = ActiveValue::Set(school_name);
        }
        if let Some(province) = param.province {
            active.province = ActiveValue::Set(province);
        }
        if let Some(region) = param.region {
            active.region = ActiveValue::Set(region);
        }
        if let Some(school_size) = param.school_size {
            active.school_size = ActiveValue::Set(school_size);
        }
        if let Some(area_type) = param.area_type {
            active.area_type = ActiveValue::Set(area_type);
        }
        if let Some(student_total) = param.student_total {
            active.student_total = ActiveValue::Set(student_total);
        }
        if let Some(director_name) = param.director_name {
            active.director_name = ActiveValue::Set(Some(director_name));
        }
        if let Some(flag) = param.quality_school_flag {
            active.quality_school_flag = ActiveValue::Set(flag);
        }
        if let Some(community_context) = param.community_context {
            active.community_context = ActiveValue::Set(Some(community_context));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(School::from_entity(entity)))
    }

    /// Deletes a school and, by cascade, its teachers.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No school with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::School::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::School::find().count(self.db).await
    }
}
