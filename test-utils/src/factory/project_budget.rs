//! Project budget factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test project budgets.
pub struct ProjectBudgetFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    fiscal_year: i32,
    name: String,
    total_allocated_satang: i64,
    is_active: bool,
}

impl<'a> ProjectBudgetFactory<'a> {
    /// Creates a factory for an active FY2568 budget of 100,000 baht.
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            created_by,
            fiscal_year: 2568,
            name: format!("Budget {}", next_id()),
            total_allocated_satang: 100_000 * 100,
            is_active: true,
        }
    }

    pub fn fiscal_year(mut self, fiscal_year: i32) -> Self {
        self.fiscal_year = fiscal_year;
        self
    }

    /// Sets the allocation in satang.
    pub fn total_allocated_satang(mut self, satang: i64) -> Self {
        self.total_allocated_satang = satang;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the budget.
    pub async fn build(self) -> Result<entity::project_budget::Model, DbErr> {
        let now = Utc::now();
        entity::project_budget::ActiveModel {
            fiscal_year: ActiveValue::Set(self.fiscal_year),
            name: ActiveValue::Set(self.name),
            total_allocated_satang: ActiveValue::Set(self.total_allocated_satang),
            funding_source: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a budget with default values.
pub async fn create_project_budget(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::project_budget::Model, DbErr> {
    ProjectBudgetFactory::new(db, created_by).build().await
}
