//! Project budget and transaction service.
//!
//! Transactions move PENDING -> APPROVED or REJECTED once. Only PENDING ones can be
//! edited or deleted. Summaries and reports aggregate in satang and count approved
//! transactions as spent.

use std::collections::BTreeMap;

use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{budget_transaction::BudgetTransactionRepository, project_budget::ProjectBudgetRepository},
    error::AppError,
    model::{
        budget::{
            ApproveTransactionParam, BudgetReport, BudgetSummary, BudgetTransaction,
            CategorySpend, CreateProjectBudgetParam, CreateTransactionParam, MonthlySpend,
            ProjectBudget, TransactionFilter, UpdateProjectBudgetParam, UpdateTransactionParam,
        },
        Page,
    },
    util::parse::month_key,
};

pub struct BudgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists budgets by fiscal year descending, each with its transaction count.
    pub async fn get_budgets(&self) -> Result<Vec<ProjectBudget>, AppError> {
        Ok(ProjectBudgetRepository::new(self.db).get_all().await?)
    }

    pub async fn create_budget(
        &self,
        param: CreateProjectBudgetParam,
    ) -> Result<ProjectBudget, AppError> {
        let budget = ProjectBudgetRepository::new(self.db).create(param).await?;

        tracing::info!(
            "User {} created budget {} for fiscal year {}",
            budget.created_by,
            budget.id,
            budget.fiscal_year
        );

        Ok(budget)
    }

    pub async fn update_budget(
        &self,
        param: UpdateProjectBudgetParam,
    ) -> Result<ProjectBudget, AppError> {
        let id = param.id;

        ProjectBudgetRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| budget_not_found(id))
    }

    pub async fn get_transactions(
        &self,
        filter: TransactionFilter,
    ) -> Result<Page<BudgetTransaction>, AppError> {
        let (transactions, total) = BudgetTransactionRepository::new(self.db)
            .get_paginated(&filter)
            .await?;

        Ok(Page::new(transactions, total, filter.page, filter.per_page))
    }

    pub async fn get_transaction(&self, id: i32) -> Result<BudgetTransaction, AppError> {
        BudgetTransactionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| transaction_not_found(id))
    }

    /// Records a PENDING transaction against an existing budget.
    pub async fn create_transaction(
        &self,
        param: CreateTransactionParam,
    ) -> Result<BudgetTransaction, AppError> {
        if !ProjectBudgetRepository::new(self.db)
            .exists(param.project_budget_id)
            .await?
        {
            return Err(budget_not_found(param.project_budget_id));
        }

        Ok(BudgetTransactionRepository::new(self.db)
            .create(param)
            .await?)
    }

    pub async fn update_transaction(
        &self,
        param: UpdateTransactionParam,
    ) -> Result<BudgetTransaction, AppError> {
        let id = param.id;
        self.ensure_pending(id, "Only pending transactions can be updated")
            .await?;

        BudgetTransactionRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| transaction_not_found(id))
    }

    pub async fn delete_transaction(&self, id: i32) -> Result<(), AppError> {
        self.ensure_pending(id, "Only pending transactions can be deleted")
            .await?;

        if !BudgetTransactionRepository::new(self.db).delete(id).await? {
            return Err(transaction_not_found(id));
        }
        Ok(())
    }

    /// Approves or rejects a PENDING transaction.
    pub async fn approve_transaction(
        &self,
        param: ApproveTransactionParam,
    ) -> Result<BudgetTransaction, AppError> {
        let (id, approved_by) = (param.id, param.approved_by);
        self.ensure_pending(id, "Only pending transactions can be approved or rejected")
            .await?;

        let transaction = BudgetTransactionRepository::new(self.db)
            .record_decision(param)
            .await?
            .ok_or_else(|| transaction_not_found(id))?;

        tracing::info!(
            "Transaction {} marked {:?} by user {}",
            id,
            transaction.status,
            approved_by
        );

        Ok(transaction)
    }

    /// Totals over the budgets matching the optional fiscal year and budget id.
    pub async fn summary(
        &self,
        fiscal_year: Option<i32>,
        project_budget_id: Option<i32>,
    ) -> Result<BudgetSummary, AppError> {
        let allocations = ProjectBudgetRepository::new(self.db)
            .allocations(fiscal_year, project_budget_id)
            .await?;
        let budget_ids: Vec<i32> = allocations.iter().map(|(id, _)| *id).collect();

        let mut summary = BudgetSummary {
            total_allocated_satang: sum_satang(allocations.iter().map(|(_, satang)| *satang)),
            total_used_satang: 0,
            total_pending_satang: 0,
            pending_count: 0,
            budget_count: allocations.len() as u64,
        };

        let amounts = BudgetTransactionRepository::new(self.db)
            .amounts_by_status(budget_ids)
            .await?;
        for (satang, status) in amounts {
            match status {
                TransactionStatus::Approved => {
                    summary.total_used_satang = summary.total_used_satang.saturating_add(satang)
                }
                TransactionStatus::Pending => {
                    summary.total_pending_satang = summary.total_pending_satang.saturating_add(satang);
                    summary.pending_count += 1;
                }
                TransactionStatus::Rejected => {}
            }
        }

        Ok(summary)
    }

    /// Approved spending broken down by category and by month.
    pub async fn report(&self, fiscal_year: Option<i32>) -> Result<BudgetReport, AppError> {
        let allocations = ProjectBudgetRepository::new(self.db)
            .allocations(fiscal_year, None)
            .await?;
        let budget_ids: Vec<i32> = allocations.iter().map(|(id, _)| *id).collect();

        let entries = BudgetTransactionRepository::new(self.db)
            .approved_entries(budget_ids)
            .await?;

        let mut total_used_satang: i64 = 0;
        let mut categories: Vec<CategorySpend> = Vec::new();
        let mut months: BTreeMap<String, (i64, u64)> = BTreeMap::new();

        for (date, satang, category) in entries {
            total_used_satang = total_used_satang.saturating_add(satang);
            add_category(&mut categories, category, satang);

            let month = months.entry(month_key(date)).or_default();
            month.0 = month.0.saturating_add(satang);
            month.1 += 1;
        }
        categories.sort_by(|a, b| b.amount_satang.cmp(&a.amount_satang));

        Ok(BudgetReport {
            fiscal_year,
            total_allocated_satang: sum_satang(allocations.iter().map(|(_, satang)| *satang)),
            total_used_satang,
            categories,
            months: months
                .into_iter()
                .map(|(month, (amount_satang, count))| MonthlySpend {
                    month,
                    amount_satang,
                    count,
                })
                .collect(),
        })
    }

    async fn ensure_pending(&self, id: i32, message: &str) -> Result<(), AppError> {
        let transaction = self.get_transaction(id).await?;

        if transaction.status != TransactionStatus::Pending {
            return Err(AppError::Forbidden(message.to_string()));
        }
        Ok(())
    }
}

/// Sums satang amounts, pinning at `i64::MAX` instead of wrapping.
fn sum_satang(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0, i64::saturating_add)
}

fn add_category(categories: &mut Vec<CategorySpend>, category: BudgetCategory, satang: i64) {
    match categories.iter_mut().find(|c| c.category == category) {
        Some(spend) => {
            spend.amount_satang = spend.amount_satang.saturating_add(satang);
            spend.count += 1;
        }
        None => categories.push(CategorySpend {
            category,
            amount_satang: satang,
            count: 1,
        }),
    }
}

fn budget_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Budget {} not found", id))
}

fn transaction_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Transaction {} not found", id))
}
