//! Budget transaction data repository.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::budget::{
    ApproveTransactionParam, BudgetTransaction, CreateTransactionParam, TransactionFilter,
    UpdateTransactionParam,
};

pub struct BudgetTransactionRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BudgetTransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a PENDING transaction.
    pub async fn create(&self, param: CreateTransactionParam) -> Result<BudgetTransaction, DbErr> {
        let now = Utc::now();
        let entity = entity::budget_transaction::ActiveModel {
            project_budget_id: ActiveValue::Set(param.project_budget_id),
            transaction_date: ActiveValue::Set(param.transaction_date),
            amount_satang: ActiveValue::Set(param.amount_satang),
            category: ActiveValue::Set(param.category),
            description: ActiveValue::Set(param.description),
            recipient: ActiveValue::Set(param.recipient),
            receipt_number: ActiveValue::Set(param.receipt_number),
            related_activity_type: ActiveValue::Set(param.related_activity_type),
            related_activity_id: ActiveValue::Set(param.related_activity_id),
            status: ActiveValue::Set(TransactionStatus::Pending),
            created_by: ActiveValue::Set(param.created_by),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BudgetTransaction::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BudgetTransaction>, DbErr> {
        let entity = entity::prelude::BudgetTransaction::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BudgetTransaction::from_entity))
    }

    /// Gets a filtered page of transactions, latest transaction date first.
    pub async fn get_paginated(
        &self,
        filter: &TransactionFilter,
    ) -> Result<(Vec<BudgetTransaction>, u64), DbErr> {
        let mut condition = Condition::all();
        if let Some(category) = filter.category {
            condition = condition.add(entity::budget_transaction::Column::Category.eq(category));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::budget_transaction::Column::Status.eq(status));
        }
        if let Some(budget_id) = filter.project_budget_id {
            condition =
                condition.add(entity::budget_transaction::Column::ProjectBudgetId.eq(budget_id));
        }
        if let Some(start) = filter.start_date {
            condition = condition.add(entity::budget_transaction::Column::TransactionDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            condition = condition.add(entity::budget_transaction::Column::TransactionDate.lte(end));
        }

        let paginator = entity::prelude::BudgetTransaction::find()
            .filter(condition)
            .order_by_desc(entity::budget_transaction::Column::TransactionDate)
            .order_by_desc(entity::budget_transaction::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page).await?;

        Ok((
            entities
                .into_iter()
                .map(BudgetTransaction::from_entity)
                .collect(),
            total,
        ))
    }

    /// Applies a partial update. The PENDING check is the caller's concern.
    pub async fn update(
        &self,
        param: UpdateTransactionParam,
    ) -> Result<Option<BudgetTransaction>, DbErr> {
        let Some(existing) = entity::prelude::BudgetTransaction::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::budget_transaction::ActiveModel = existing.into();
        if let Some(date) = param.transaction_date {
            active.transaction_date = ActiveValue::Set(date);
        }
        if let Some(satang) = param.amount_satang {
            active.amount_satang = ActiveValue::Set(satang);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(recipient) = param.recipient {
            active.recipient = ActiveValue::Set(Some(recipient));
        }
        if let Some(receipt_number) = param.receipt_number {
            active.receipt_number = ActiveValue::Set(Some(receipt_number));
        }
        if let Some(activity_type) = param.related_activity_type {
            active.related_activity_type = ActiveValue::Set(Some(activity_type));
        }
        if let Some(activity_id) = param.related_activity_id {
            active.related_activity_id = ActiveValue::Set(Some(activity_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(BudgetTransaction::from_entity(entity)))
    }

    /// Records an approval or rejection decision.
    pub async fn record_decision(
        &self,
        param: ApproveTransactionParam,
    ) -> Result<Option<BudgetTransaction>, DbErr> {
        let Some(existing) = entity::prelude::BudgetTransaction::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::budget_transaction::ActiveModel = existing.into();
        active.status = ActiveValue::Set(param.status);
        active.approved_by = ActiveValue::Set(Some(param.approved_by));
        active.approved_at = ActiveValue::Set(Some(now));
        active.rejection_reason = ActiveValue::Set(param.rejection_reason);
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;

        Ok(Some(BudgetTransaction::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BudgetTransaction::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Amount and status of every transaction under the given budgets.
    pub async fn amounts_by_status(
        &self,
        budget_ids: Vec<i32>,
    ) -> Result<Vec<(i64, TransactionStatus)>, DbErr> {
        if budget_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BudgetTransaction::find()
            .select_only()
            .column(entity::budget_transaction::Column::AmountSatang)
            .column(entity::budget_transaction::Column::Status)
            .filter(entity::budget_transaction::Column::ProjectBudgetId.is_in(budget_ids))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Date, amount and category of every APPROVED transaction under the given budgets.
    pub async fn approved_entries(
        &self,
        budget_ids: Vec<i32>,
    ) -> Result<Vec<(NaiveDate, i64, BudgetCategory)>, DbErr> {
        if budget_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BudgetTransaction::find()
            .select_only()
            .column(entity::budget_transaction::Column::TransactionDate)
            .column(entity::budget_transaction::Column::AmountSatang)
            .column(entity::budget_transaction::Column::Category)
            .filter(entity::budget_transaction::Column::ProjectBudgetId.is_in(budget_ids))
            .filter(entity::budget_transaction::Column::Status.eq(TransactionStatus::Approved))
            .into_tuple()
            .all(self.db)
            .await
    }
}
