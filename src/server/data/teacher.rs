//! Teacher data repository.
//!
//! Listing queries join the school so region and province filters can match through
//! it. Uniqueness of citizen id and email is checked here before writes so the
//! service can report which field collided.

use chrono::Utc;
use entity::sea_orm_active_enums::{Region, TeacherStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    report::{TeacherReportFilter, ASSISTANT_TEACHER_POSITION},
    school::School,
    teacher::{CreateTeacherParam, Teacher, TeacherFilter, TeacherWithSchool, UpdateTeacherParam},
};

/// Value a scrubbed teacher name is replaced with.
pub const ANONYMIZED_NAME: &str = "Anonymized";

pub struct TeacherRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTeacherParam) -> Result<Teacher, DbErr> {
        let now = Utc::now();
        let entity = entity::teacher::ActiveModel {
            citizen_id: ActiveValue::Set(param.citizen_id),
            full_name: ActiveValue::Set(param.full_name),
            gender: ActiveValue::Set(param.gender),
            birth_date: ActiveValue::Set(param.birth_date),
            cohort: ActiveValue::Set(param.cohort),
            appointment_date: ActiveValue::Set(param.appointment_date),
            position: ActiveValue::Set(param.position),
            major: ActiveValue::Set(param.major),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            school_id: ActiveValue::Set(param.school_id),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Teacher::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, DbErr> {
        let entity = entity::prelude::Teacher::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Teacher::from_entity))
    }

    /// Finds a teacher together with their school.
    pub async fn find_with_school(&self, id: i32) -> Result<Option<TeacherWithSchool>, DbErr> {
        let result = entity::prelude::Teacher::find_by_id(id)
            .find_also_related(entity::prelude::School)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(teacher, school)| {
            school.map(|school| TeacherWithSchool {
                teacher: Teacher::from_entity(teacher),
                school: School::from_entity(school),
            })
        }))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether another teacher already uses `citizen_id`.
    ///
    /// # Arguments
    /// - `citizen_id` - Citizen id to look for
    /// - `exclude_id` - Teacher being updated, ignored in the check
    pub async fn citizen_id_taken(
        &self,
        citizen_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::CitizenId.eq(citizen_id));
        if let Some(id) = exclude_id {
            query = query.filter(entity::teacher::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Whether another teacher already uses `email`.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Teacher::find().filter(entity::teacher::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::teacher::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets a filtered page of teachers, newest first, each with their school.
    ///
    /// `search` matches a substring of full name, citizen id, or email. Region and
    /// province are matched against the teacher's school.
    ///
    /// # Returns
    /// - `Ok((teachers, total))` - Teachers for the requested page and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &TeacherFilter,
    ) -> Result<(Vec<TeacherWithSchool>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::teacher::Column::FullName.contains(search))
                    .add(entity::teacher::Column::CitizenId.contains(search))
                    .add(entity::teacher::Column::Email.contains(search)),
            );
        }
        if let Some(region) = filter.region {
            condition = condition.add(entity::school::Column::Region.eq(region));
        }
        if let Some(province) = &filter.province {
            condition = condition.add(entity::school::Column::Province.eq(province.as_str()));
        }
        if let Some(school_id) = filter.school_id {
            condition = condition.add(entity::teacher::Column::SchoolId.eq(school_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::teacher::Column::Status.eq(status));
        }
        if let Some(cohort) = filter.cohort {
            condition = condition.add(entity::teacher::Column::Cohort.eq(cohort));
        }

        let paginator = entity::prelude::Teacher::find()
            .find_also_related(entity::prelude::School)
            .filter(condition)
            .order_by_desc(entity::teacher::Column::CreatedAt)
            .order_by_desc(entity::teacher::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page).await?;

        let teachers = rows
            .into_iter()
            .filter_map(|(teacher, school)| {
                school.map(|school| TeacherWithSchool {
                    teacher: Teacher::from_entity(teacher),
                    school: School::from_entity(school),
                })
            })
            .collect();

        Ok((teachers, total))
    }

    /// Gets every teacher of a school ordered by full name.
    pub async fn get_by_school(&self, school_id: i32) -> Result<Vec<Teacher>, DbErr> {
        let entities = entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::SchoolId.eq(school_id))
            .order_by_asc(entity::teacher::Column::FullName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Teacher::from_entity).collect())
    }

    /// Gets every teacher with their school, ordered by full name.
    pub async fn get_all_with_school(&self) -> Result<Vec<TeacherWithSchool>, DbErr> {
        let rows = entity::prelude::Teacher::find()
            .find_also_related(entity::prelude::School)
            .order_by_asc(entity::teacher::Column::FullName)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(teacher, school)| {
                school.map(|school| TeacherWithSchool {
                    teacher: Teacher::from_entity(teacher),
                    school: School::from_entity(school),
                })
            })
            .collect())
    }

    /// Assistant teachers matching the report filter, ordered by province then name.
    pub async fn find_for_report(
        &self,
        filter: &TeacherReportFilter,
    ) -> Result<Vec<TeacherWithSchool>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::teacher::Column::Position.eq(ASSISTANT_TEACHER_POSITION));
        if let Some(school_id) = filter.school_id {
            condition = condition.add(entity::teacher::Column::SchoolId.eq(school_id));
        }
        if let Some(province) = &filter.province {
            condition = condition.add(entity::school::Column::Province.eq(province.as_str()));
        }
        if let Some(region) = filter.region {
            condition = condition.add(entity::school::Column::Region.eq(region));
        }
        if let Some(cohort) = filter.cohort {
            condition = condition.add(entity::teacher::Column::Cohort.eq(cohort));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::teacher::Column::Status.eq(status));
        }

        let rows = entity::prelude::Teacher::find()
            .find_also_related(entity::prelude::School)
            .filter(condition)
            .order_by_asc(entity::school::Column::Province)
            .order_by_asc(entity::teacher::Column::FullName)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(teacher, school)| {
                school.map(|school| TeacherWithSchool {
                    teacher: Teacher::from_entity(teacher),
                    school: School::from_entity(school),
                })
            })
            .collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Teacher::find().count(self.db).await
    }

    /// Teacher counts per school region. Regions without teachers are absent.
    pub async fn count_by_region(&self) -> Result<Vec<(Region, i64)>, DbErr> {
        entity::prelude::Teacher::find()
            .select_only()
            .column(entity::school::Column::Region)
            .column_as(entity::teacher::Column::Id.count(), "count")
            .join(JoinType::InnerJoin, entity::teacher::Relation::School.def())
            .group_by(entity::school::Column::Region)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Teacher counts per status. Statuses without teachers are absent.
    pub async fn count_by_status(&self) -> Result<Vec<(TeacherStatus, i64)>, DbErr> {
        entity::prelude::Teacher::find()
            .select_only()
            .column(entity::teacher::Column::Status)
            .column_as(entity::teacher::Column::Id.count(), "count")
            .group_by(entity::teacher::Column::Status)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Teacher))` - The updated teacher
    /// - `Ok(None)` - No teacher with that id
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<Option<Teacher>, DbErr> {
        let Some(existing) = entity::prelude::Teacher::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::teacher::ActiveModel = existing.into();
        if let Some(citizen_id) = param.citizen_id {
            active.citizen_id = ActiveValue::Set(citizen_id);
        }
        if let Some(full_name) = param.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(birth_date) = param.birth_date {
            active.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(cohort) = param.cohort {
            active.cohort = ActiveValue::Set(cohort);
        }
        if let Some(appointment_date) = param.appointment_date {
            active.appointment_date = ActiveValue::Set(appointment_date);
        }
        if let Some(position) = param.position {
            active.position = ActiveValue::Set(position);
        }
        if let Some(major) = param.major {
            active.major = ActiveValue::Set(Some(major));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(school_id) = param.school_id {
            active.school_id = ActiveValue::Set(school_id);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Teacher::from_entity(entity)))
    }

    /// Replaces identifying fields of a teacher record.
    ///
    /// The name becomes `ANONYMIZED_NAME`, email and phone are cleared, and the citizen
    /// id is replaced by a 13-character placeholder derived from the row id so the
    /// unique index still holds.
    pub async fn scrub_personal_info(&self, id: i32) -> Result<(), DbErr> {
        let Some(existing) = entity::prelude::Teacher::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::teacher::ActiveModel = existing.into();
        active.full_name = ActiveValue::Set(ANONYMIZED_NAME.to_string());
        active.email = ActiveValue::Set(None);
        active.phone = ActiveValue::Set(None);
        active.citizen_id = ActiveValue::Set(format!("X{:012}", id));
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    /// Deletes a teacher; activity rows go with it by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No teacher with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Teacher::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
