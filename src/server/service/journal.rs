//! Reflective journal service.
//!
//! A teacher keeps at most one journal per month. The month check runs here so the
//! caller gets a specific 409 rather than the unique-index fallback.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::reflective_journal::ReflectiveJournalRepository,
    error::AppError,
    model::journal::{CreateJournalParam, Journal, UpdateJournalParam},
    service::teacher::ensure_teacher_exists,
};

pub struct JournalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JournalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists journals by month descending, optionally for one teacher.
    pub async fn get_all(&self, teacher_id: Option<i32>) -> Result<Vec<Journal>, AppError> {
        Ok(ReflectiveJournalRepository::new(self.db)
            .get_all(teacher_id, None)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Journal, AppError> {
        ReflectiveJournalRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a journal.
    ///
    /// # Returns
    /// - `Ok(Journal)` - The created journal
    /// - `Err(AppError::NotFound)` - Teacher does not exist
    /// - `Err(AppError::Conflict)` - The teacher already has a journal for the month
    pub async fn create(&self, param: CreateJournalParam) -> Result<Journal, AppError> {
        ensure_teacher_exists(self.db, param.teacher_id).await?;

        let repo = ReflectiveJournalRepository::new(self.db);
        if repo.month_taken(param.teacher_id, &param.month, None).await? {
            return Err(month_conflict());
        }

        Ok(repo.create(param).await?)
    }

    /// Applies a partial update; moving to a month that already has a journal is a 409.
    pub async fn update(&self, param: UpdateJournalParam) -> Result<Journal, AppError> {
        let repo = ReflectiveJournalRepository::new(self.db);
        let id = param.id;

        let existing = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        if let Some(month) = &param.month {
            if repo.month_taken(existing.teacher_id, month, Some(id)).await? {
                return Err(month_conflict());
            }
        }

        repo.update(param).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReflectiveJournalRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Journal with ID {} not found", id))
}

fn month_conflict() -> AppError {
    AppError::Conflict("Journal for this month already exists".to_string())
}
