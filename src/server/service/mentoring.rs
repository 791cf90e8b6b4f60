//! Mentoring visit service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::mentoring_visit::MentoringVisitRepository,
    error::AppError,
    model::{
        mentoring::{
            CreateMentoringVisitParam, MentoringFilter, MentoringVisit, UpdateMentoringVisitParam,
        },
        Page,
    },
    service::teacher::ensure_teacher_exists,
};

pub struct MentoringService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentoringService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: MentoringFilter,
    ) -> Result<Page<MentoringVisit>, AppError> {
        let (visits, total) = MentoringVisitRepository::new(self.db)
            .get_paginated(&filter)
            .await?;

        Ok(Page::new(visits, total, filter.page, filter.per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MentoringVisit, AppError> {
        MentoringVisitRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Logs a visit for an existing teacher and returns it with the teacher attached.
    pub async fn create(&self, param: CreateMentoringVisitParam) -> Result<MentoringVisit, AppError> {
        ensure_teacher_exists(self.db, param.teacher_id).await?;

        let repo = MentoringVisitRepository::new(self.db);
        let created = repo.create(param).await?;

        repo.find_by_id(created.id)
            .await?
            .ok_or_else(|| not_found(created.id))
    }

    pub async fn update(&self, param: UpdateMentoringVisitParam) -> Result<MentoringVisit, AppError> {
        let id = param.id;

        MentoringVisitRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MentoringVisitRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Mentoring visit with ID {} not found", id))
}
