//! User service for business logic.
//!
//! Admin-facing account management: listing and partial updates of role, name,
//! linked teacher, and active flag.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{teacher::TeacherRepository, user::UserRepository},
    error::AppError,
    model::{
        user::{UpdateUserParam, User},
        Page,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves users ordered by email with pagination.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(users, total, page, per_page))
    }

    /// Applies a partial update to an account.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No such user, or the linked teacher does not exist
    pub async fn update(&self, param: UpdateUserParam) -> Result<User, AppError> {
        let id = param.id;

        if let Some(teacher_id) = param.teacher_id {
            if !TeacherRepository::new(self.db).exists(teacher_id).await? {
                return Err(AppError::NotFound(format!(
                    "Teacher with ID {} not found",
                    teacher_id
                )));
            }
        }

        UserRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", id)))
    }
}
