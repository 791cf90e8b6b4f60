//! PLC activity service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::plc_activity::PlcActivityRepository,
    error::AppError,
    model::{
        plc::{
            CreatePlcActivityParam, PlcActivity, PlcFilter, PlcGroupCount, UpdatePlcActivityParam,
        },
        Page,
    },
    service::teacher::ensure_teacher_exists,
};

pub struct PlcService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlcService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, filter: PlcFilter) -> Result<Page<PlcActivity>, AppError> {
        let (activities, total) = PlcActivityRepository::new(self.db)
            .get_paginated(&filter)
            .await?;

        Ok(Page::new(activities, total, filter.page, filter.per_page))
    }

    /// Activity counts per PLC level, ordered by level.
    pub async fn get_group_stats(&self) -> Result<Vec<PlcGroupCount>, AppError> {
        Ok(PlcActivityRepository::new(self.db).count_by_level().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PlcActivity, AppError> {
        PlcActivityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, param: CreatePlcActivityParam) -> Result<PlcActivity, AppError> {
        ensure_teacher_exists(self.db, param.teacher_id).await?;

        Ok(PlcActivityRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdatePlcActivityParam) -> Result<PlcActivity, AppError> {
        let id = param.id;

        PlcActivityRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlcActivityRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("PLC activity with ID {} not found", id))
}
