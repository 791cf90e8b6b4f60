//! School service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{school::SchoolRepository, teacher::TeacherRepository},
    error::AppError,
    model::{
        school::{
            CreateSchoolParam, School, SchoolDetail, SchoolFilter, SchoolWithTeacherCount,
            UpdateSchoolParam,
        },
        teacher::Teacher,
        Page,
    },
};

pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a filtered page of schools with their teacher counts.
    pub async fn get_paginated(
        &self,
        filter: SchoolFilter,
    ) -> Result<Page<SchoolWithTeacherCount>, AppError> {
        let repo = SchoolRepository::new(self.db);

        let (schools, total) = repo.get_paginated(&filter).await?;

        Ok(Page::new(schools, total, filter.page, filter.per_page))
    }

    /// Gets a school with its teachers ordered by name.
    ///
    /// # Returns
    /// - `Ok(SchoolDetail)` - The school and its teachers
    /// - `Err(AppError::NotFound)` - No school with that id
    pub async fn get_detail(&self, id: i32) -> Result<SchoolDetail, AppError> {
        let school = self.find_or_not_found(id).await?;
        let teachers = TeacherRepository::new(self.db).get_by_school(id).await?;

        Ok(SchoolDetail { school, teachers })
    }

    /// Gets the teachers of an existing school.
    pub async fn get_teachers(&self, id: i32) -> Result<Vec<Teacher>, AppError> {
        if !SchoolRepository::new(self.db).exists(id).await? {
            return Err(not_found(id));
        }

        Ok(TeacherRepository::new(self.db).get_by_school(id).await?)
    }

    pub async fn create(&self, param: CreateSchoolParam) -> Result<School, AppError> {
        let school = SchoolRepository::new(self.db).create(param).await?;

        tracing::info!("Created school {} ({})", school.id, school.school_name);

        Ok(school)
    }

    pub async fn update(&self, param: UpdateSchoolParam) -> Result<School, AppError> {
        let id = param.id;

        SchoolRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a school together with its teachers.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SchoolRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted school {}", id);

        Ok(())
    }

    async fn find_or_not_found(&self, id: i32) -> Result<School, AppError> {
        SchoolRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("School with ID {} not found", id))
}
