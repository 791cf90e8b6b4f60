//! Teacher factory for creating test teacher entities.
//!
//! Every teacher belongs to a school, so the factory requires a `school_id`. Use
//! `helpers::create_teacher_with_school` when the school itself doesn't matter.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, TeacherStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    school_id: i32,
    citizen_id: String,
    full_name: String,
    gender: Gender,
    cohort: i32,
    appointment_date: NaiveDate,
    position: String,
    email: Option<String>,
    status: TeacherStatus,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - citizen_id: 13-digit string derived from an auto-incremented id
    /// - full_name: `"Teacher {id}"`
    /// - gender: `FEMALE`, cohort: `1`, position: `"ครูผู้ช่วย"` (assistant teacher)
    /// - appointment_date: `2024-05-16`
    /// - email: `None`, status: `ACTIVE`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `school_id` - Id of an existing school
    pub fn new(db: &'a DatabaseConnection, school_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            school_id,
            citizen_id: format!("{:013}", id),
            full_name: format!("Teacher {}", id),
            gender: Gender::Female,
            cohort: 1,
            appointment_date: NaiveDate::from_ymd_opt(2024, 5, 16).unwrap_or_default(),
            position: "ครูผู้ช่วย".to_string(),
            email: None,
            status: TeacherStatus::Active,
        }
    }

    /// Sets the 13-digit citizen id.
    pub fn citizen_id(mut self, citizen_id: impl Into<String>) -> Self {
        self.citizen_id = citizen_id.into();
        self
    }

    /// Sets the full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the program cohort.
    pub fn cohort(mut self, cohort: i32) -> Self {
        self.cohort = cohort;
        self
    }

    /// Sets the position title.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the contact email.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the employment status.
    pub fn status(mut self, status: TeacherStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        let now = Utc::now();
        entity::teacher::ActiveModel {
            citizen_id: ActiveValue::Set(self.citizen_id),
            full_name: ActiveValue::Set(self.full_name),
            gender: ActiveValue::Set(self.gender),
            birth_date: ActiveValue::Set(None),
            cohort: ActiveValue::Set(self.cohort),
            appointment_date: ActiveValue::Set(self.appointment_date),
            position: ActiveValue::Set(self.position),
            major: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            school_id: ActiveValue::Set(self.school_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values at the given school.
pub async fn create_teacher(
    db: &DatabaseConnection,
    school_id: i32,
) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db, school_id).build().await
}
