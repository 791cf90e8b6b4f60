//! Project budget data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::budget::{
    CreateProjectBudgetParam, ProjectBudget, UpdateProjectBudgetParam,
};

pub struct ProjectBudgetRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectBudgetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProjectBudgetParam) -> Result<ProjectBudget, DbErr> {
        let now = Utc::now();
        let entity = entity::project_budget::ActiveModel {
            fiscal_year: ActiveValue::Set(param.fiscal_year),
            name: ActiveValue::Set(param.name),
            total_allocated_satang: ActiveValue::Set(param.total_allocated_satang),
            funding_source: ActiveValue::Set(param.funding_source),
            description: ActiveValue::Set(param.description),
            is_active: ActiveValue::Set(param.is_active),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ProjectBudget::from_entity(entity, 0))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ProjectBudget>, DbErr> {
        let Some(entity) = entity::prelude::ProjectBudget::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let count = self.transaction_count(id).await?;

        Ok(Some(ProjectBudget::from_entity(entity, count)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ProjectBudget::find()
            .filter(entity::project_budget::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn transaction_count(&self, budget_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BudgetTransaction::find()
            .filter(entity::budget_transaction::Column::ProjectBudgetId.eq(budget_id))
            .count(self.db)
            .await
    }

    /// Gets every budget, latest fiscal year first, with transaction counts.
    pub async fn get_all(&self) -> Result<Vec<ProjectBudget>, DbErr> {
        let entities = entity::prelude::ProjectBudget::find()
            .order_by_desc(entity::project_budget::Column::FiscalYear)
            .order_by_asc(entity::project_budget::Column::Name)
            .all(self.db)
            .await?;

        let budget_ids: Vec<i32> = entity::prelude::BudgetTransaction::find()
            .select_only()
            .column(entity::budget_transaction::Column::ProjectBudgetId)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        for budget_id in budget_ids {
            *counts.entry(budget_id).or_insert(0) += 1;
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let count = counts.get(&entity.id).copied().unwrap_or(0);
                ProjectBudget::from_entity(entity, count)
            })
            .collect())
    }

    /// Ids and allocations of budgets matching the optional fiscal year and id.
    pub async fn allocations(
        &self,
        fiscal_year: Option<i32>,
        budget_id: Option<i32>,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        let mut condition = Condition::all();
        if let Some(fiscal_year) = fiscal_year {
            condition = condition.add(entity::project_budget::Column::FiscalYear.eq(fiscal_year));
        }
        if let Some(budget_id) = budget_id {
            condition = condition.add(entity::project_budget::Column::Id.eq(budget_id));
        }

        entity::prelude::ProjectBudget::find()
            .select_only()
            .column(entity::project_budget::Column::Id)
            .column(entity::project_budget::Column::TotalAllocatedSatang)
            .filter(condition)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        param: UpdateProjectBudgetParam,
    ) -> Result<Option<ProjectBudget>, DbErr> {
        let Some(existing) = entity::prelude::ProjectBudget::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::project_budget::ActiveModel = existing.into();
        if let Some(fiscal_year) = param.fiscal_year {
            active.fiscal_year = ActiveValue::Set(fiscal_year);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(satang) = param.total_allocated_satang {
            active.total_allocated_satang = ActiveValue::Set(satang);
        }
        if let Some(funding_source) = param.funding_source {
            active.funding_source = ActiveValue::Set(Some(funding_source));
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        let count = self.transaction_count(entity.id).await?;

        Ok(Some(ProjectBudget::from_entity(entity, count)))
    }
}
