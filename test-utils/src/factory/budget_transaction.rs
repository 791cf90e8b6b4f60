//! Budget transaction factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test budget transactions.
pub struct BudgetTransactionFactory<'a> {
    db: &'a DatabaseConnection,
    project_budget_id: i32,
    created_by: i32,
    transaction_date: NaiveDate,
    amount_satang: i64,
    category: BudgetCategory,
    status: TransactionStatus,
}

impl<'a> BudgetTransactionFactory<'a> {
    /// Creates a factory for a PENDING 1,000 baht TRAVEL expense on 2025-02-01.
    pub fn new(db: &'a DatabaseConnection, project_budget_id: i32, created_by: i32) -> Self {
        Self {
            db,
            project_budget_id,
            created_by,
            transaction_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or_default(),
            amount_satang: 1_000 * 100,
            category: BudgetCategory::Travel,
            status: TransactionStatus::Pending,
        }
    }

    /// Sets the amount in satang.
    pub fn amount_satang(mut self, satang: i64) -> Self {
        self.amount_satang = satang;
        self
    }

    pub fn category(mut self, category: BudgetCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the status. APPROVED stamps the creator as approver.
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn transaction_date(mut self, date: NaiveDate) -> Self {
        self.transaction_date = date;
        self
    }

    /// Builds and inserts the transaction.
    pub async fn build(self) -> Result<entity::budget_transaction::Model, DbErr> {
        let now = Utc::now();
        let approved = self.status == TransactionStatus::Approved;

        entity::budget_transaction::ActiveModel {
            project_budget_id: ActiveValue::Set(self.project_budget_id),
            transaction_date: ActiveValue::Set(self.transaction_date),
            amount_satang: ActiveValue::Set(self.amount_satang),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set("Mentor travel".to_string()),
            recipient: ActiveValue::Set(None),
            receipt_number: ActiveValue::Set(None),
            related_activity_type: ActiveValue::Set(None),
            related_activity_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_by: ActiveValue::Set(self.created_by),
            approved_by: ActiveValue::Set(approved.then_some(self.created_by)),
            approved_at: ActiveValue::Set(approved.then_some(now)),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING transaction with default values.
pub async fn create_budget_transaction(
    db: &DatabaseConnection,
    project_budget_id: i32,
    created_by: i32,
) -> Result<entity::budget_transaction::Model, DbErr> {
    BudgetTransactionFactory::new(db, project_budget_id, created_by)
        .build()
        .await
}
