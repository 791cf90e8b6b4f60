//! Project budget and transaction domain models.
//!
//! Money is held as integer satang (1/100 baht) everywhere below the controller.
//! DTOs carry baht as `f64`; `baht_to_satang` and `satang_to_baht` convert at the
//! boundary.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};

use crate::{
    model::budget::{
        ApproveTransactionDto, BudgetReportDto, BudgetSummaryDto, BudgetTransactionDto,
        CategoryBreakdownDto, CreateProjectBudgetDto, CreateTransactionDto,
        MonthlyBreakdownDto, PaginatedTransactionsDto, ProjectBudgetDto, TransactionQueryDto,
        UpdateProjectBudgetDto, UpdateTransactionDto,
    },
    server::{
        error::AppError,
        model::Page,
        util::sanitize::{sanitize, sanitize_opt},
    },
};

/// Largest page size accepted by the transaction listing.
pub const MAX_TRANSACTION_ENTRIES: u64 = 100;

/// Largest single amount, in baht, a budget or transaction may carry. Keeps
/// satang totals well inside `i64` however many rows are summed.
pub const MAX_AMOUNT_BAHT: f64 = 1_000_000_000.0;

/// Converts baht to satang, rounding to the nearest satang.
pub fn baht_to_satang(baht: f64) -> i64 {
    (baht * 100.0).round() as i64
}

pub fn satang_to_baht(satang: i64) -> f64 {
    satang as f64 / 100.0
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBudget {
    pub id: i32,
    /// Thai Buddhist-era fiscal year, e.g. 2568.
    pub fiscal_year: i32,
    pub name: String,
    pub total_allocated_satang: i64,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
    pub transaction_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectBudget {
    pub fn from_entity(entity: entity::project_budget::Model, transaction_count: u64) -> Self {
        Self {
            id: entity.id,
            fiscal_year: entity.fiscal_year,
            name: entity.name,
            total_allocated_satang: entity.total_allocated_satang,
            funding_source: entity.funding_source,
            description: entity.description,
            is_active: entity.is_active,
            created_by: entity.created_by,
            transaction_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProjectBudgetDto {
        ProjectBudgetDto {
            id: self.id,
            fiscal_year: self.fiscal_year,
            name: self.name,
            total_allocated: satang_to_baht(self.total_allocated_satang),
            funding_source: self.funding_source,
            description: self.description,
            is_active: self.is_active,
            created_by: self.created_by,
            transaction_count: self.transaction_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProjectBudgetParam {
    pub fiscal_year: i32,
    pub name: String,
    pub total_allocated_satang: i64,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
}

impl CreateProjectBudgetParam {
    pub fn from_dto(dto: CreateProjectBudgetDto, created_by: i32) -> Result<Self, AppError> {
        Ok(Self {
            fiscal_year: dto.fiscal_year,
            name: sanitize(&dto.name),
            total_allocated_satang: allocated_satang(dto.total_allocated)?,
            funding_source: sanitize_opt(dto.funding_source),
            description: sanitize_opt(dto.description),
            is_active: dto.is_active.unwrap_or(true),
            created_by,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectBudgetParam {
    pub id: i32,
    pub fiscal_year: Option<i32>,
    pub name: Option<String>,
    pub total_allocated_satang: Option<i64>,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProjectBudgetParam {
    pub fn from_dto(id: i32, dto: UpdateProjectBudgetDto) -> Result<Self, AppError> {
        let total_allocated_satang = match dto.total_allocated {
            Some(amount) => Some(allocated_satang(amount)?),
            None => None,
        };

        Ok(Self {
            id,
            fiscal_year: dto.fiscal_year,
            name: dto.name.as_deref().map(sanitize),
            total_allocated_satang,
            funding_source: sanitize_opt(dto.funding_source),
            description: sanitize_opt(dto.description),
            is_active: dto.is_active,
        })
    }
}

fn allocated_satang(baht: f64) -> Result<i64, AppError> {
    if !baht.is_finite() || baht < 0.0 {
        return Err(AppError::BadRequest(
            "Total allocated must be zero or greater".to_string(),
        ));
    }
    if baht > MAX_AMOUNT_BAHT {
        return Err(amount_too_large());
    }
    Ok(baht_to_satang(baht))
}

fn transaction_satang(baht: f64) -> Result<i64, AppError> {
    let satang = if baht.is_finite() { baht_to_satang(baht) } else { 0 };
    if satang < 1 {
        return Err(AppError::BadRequest(
            "Amount must be at least 0.01".to_string(),
        ));
    }
    if baht > MAX_AMOUNT_BAHT {
        return Err(amount_too_large());
    }
    Ok(satang)
}

fn amount_too_large() -> AppError {
    AppError::BadRequest(format!(
        "Amount must not exceed {} baht",
        MAX_AMOUNT_BAHT as i64
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTransaction {
    pub id: i32,
    pub project_budget_id: i32,
    pub transaction_date: NaiveDate,
    pub amount_satang: i64,
    pub category: BudgetCategory,
    pub description: String,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
    pub status: TransactionStatus,
    pub created_by: i32,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetTransaction {
    pub fn from_entity(entity: entity::budget_transaction::Model) -> Self {
        Self {
            id: entity.id,
            project_budget_id: entity.project_budget_id,
            transaction_date: entity.transaction_date,
            amount_satang: entity.amount_satang,
            category: entity.category,
            description: entity.description,
            recipient: entity.recipient,
            receipt_number: entity.receipt_number,
            related_activity_type: entity.related_activity_type,
            related_activity_id: entity.related_activity_id,
            status: entity.status,
            created_by: entity.created_by,
            approved_by: entity.approved_by,
            approved_at: entity.approved_at,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BudgetTransactionDto {
        BudgetTransactionDto {
            id: self.id,
            project_budget_id: self.project_budget_id,
            transaction_date: self.transaction_date,
            amount: satang_to_baht(self.amount_satang),
            category: self.category,
            description: self.description,
            recipient: self.recipient,
            receipt_number: self.receipt_number,
            related_activity_type: self.related_activity_type,
            related_activity_id: self.related_activity_id,
            status: self.status,
            created_by: self.created_by,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page<BudgetTransaction> {
    pub fn into_dto(self) -> PaginatedTransactionsDto {
        PaginatedTransactionsDto {
            transactions: self
                .items
                .into_iter()
                .map(BudgetTransaction::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category: Option<BudgetCategory>,
    pub status: Option<TransactionStatus>,
    pub project_budget_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u64,
    pub per_page: u64,
}

impl TransactionFilter {
    /// Builds the filter, clamping the page size to `MAX_TRANSACTION_ENTRIES`.
    pub fn from_dto(dto: TransactionQueryDto) -> Self {
        Self {
            category: dto.category,
            status: dto.status,
            project_budget_id: dto.project_budget_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            page: dto.page,
            per_page: dto.entries.clamp(1, MAX_TRANSACTION_ENTRIES),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub project_budget_id: i32,
    pub transaction_date: NaiveDate,
    pub amount_satang: i64,
    pub category: BudgetCategory,
    pub description: String,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
    pub created_by: i32,
}

impl CreateTransactionParam {
    pub fn from_dto(dto: CreateTransactionDto, created_by: i32) -> Result<Self, AppError> {
        Ok(Self {
            project_budget_id: dto.project_budget_id,
            transaction_date: dto.transaction_date,
            amount_satang: transaction_satang(dto.amount)?,
            category: dto.category,
            description: sanitize(&dto.description),
            recipient: sanitize_opt(dto.recipient),
            receipt_number: sanitize_opt(dto.receipt_number),
            related_activity_type: sanitize_opt(dto.related_activity_type),
            related_activity_id: dto.related_activity_id,
            created_by,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionParam {
    pub id: i32,
    pub transaction_date: Option<NaiveDate>,
    pub amount_satang: Option<i64>,
    pub category: Option<BudgetCategory>,
    pub description: Option<String>,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
}

impl UpdateTransactionParam {
    pub fn from_dto(id: i32, dto: UpdateTransactionDto) -> Result<Self, AppError> {
        let amount_satang = match dto.amount {
            Some(amount) => Some(transaction_satang(amount)?),
            None => None,
        };

        Ok(Self {
            id,
            transaction_date: dto.transaction_date,
            amount_satang,
            category: dto.category,
            description: dto.description.as_deref().map(sanitize),
            recipient: sanitize_opt(dto.recipient),
            receipt_number: sanitize_opt(dto.receipt_number),
            related_activity_type: sanitize_opt(dto.related_activity_type),
            related_activity_id: dto.related_activity_id,
        })
    }
}

/// Approval decision on a pending transaction.
#[derive(Debug, Clone)]
pub struct ApproveTransactionParam {
    pub id: i32,
    pub approved_by: i32,
    /// APPROVED or REJECTED.
    pub status: TransactionStatus,
    pub rejection_reason: Option<String>,
}

impl ApproveTransactionParam {
    /// Builds the decision; a rejection must carry a non-empty reason.
    pub fn from_dto(id: i32, approved_by: i32, dto: ApproveTransactionDto) -> Result<Self, AppError> {
        let rejection_reason = sanitize_opt(dto.rejection_reason);

        if !dto.approve && rejection_reason.is_none() {
            return Err(AppError::BadRequest(
                "Rejection reason is required".to_string(),
            ));
        }

        Ok(Self {
            id,
            approved_by,
            status: if dto.approve {
                TransactionStatus::Approved
            } else {
                TransactionStatus::Rejected
            },
            rejection_reason: if dto.approve { None } else { rejection_reason },
        })
    }
}

/// Budget totals across the selected budgets, in satang.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_allocated_satang: i64,
    pub total_used_satang: i64,
    pub total_pending_satang: i64,
    pub pending_count: u64,
    pub budget_count: u64,
}

impl BudgetSummary {
    /// Allocation left after approved spending, never negative.
    pub fn remaining_satang(&self) -> i64 {
        self.total_allocated_satang
            .saturating_sub(self.total_used_satang)
            .max(0)
    }

    pub fn into_dto(self) -> BudgetSummaryDto {
        BudgetSummaryDto {
            total_allocated: satang_to_baht(self.total_allocated_satang),
            total_used: satang_to_baht(self.total_used_satang),
            total_pending: satang_to_baht(self.total_pending_satang),
            total_remaining: satang_to_baht(self.remaining_satang()),
            pending_count: self.pending_count,
            budget_count: self.budget_count,
        }
    }
}

/// Approved spending of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: BudgetCategory,
    pub amount_satang: i64,
    pub count: u64,
}

/// Approved spending of one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpend {
    pub month: String,
    pub amount_satang: i64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub fiscal_year: Option<i32>,
    pub total_allocated_satang: i64,
    pub total_used_satang: i64,
    /// Ordered by amount descending.
    pub categories: Vec<CategorySpend>,
    /// Ordered by month ascending.
    pub months: Vec<MonthlySpend>,
}

impl BudgetReport {
    pub fn into_dto(self) -> BudgetReportDto {
        let used = self.total_used_satang;

        BudgetReportDto {
            fiscal_year: self.fiscal_year,
            total_allocated: satang_to_baht(self.total_allocated_satang),
            total_used: satang_to_baht(used),
            usage_percentage: percentage(used, self.total_allocated_satang),
            category_breakdown: self
                .categories
                .into_iter()
                .map(|c| CategoryBreakdownDto {
                    category: c.category,
                    amount: satang_to_baht(c.amount_satang),
                    count: c.count,
                    percentage: percentage(c.amount_satang, used),
                })
                .collect(),
            monthly_breakdown: self
                .months
                .into_iter()
                .map(|m| MonthlyBreakdownDto {
                    month: m.month,
                    amount: satang_to_baht(m.amount_satang),
                    count: m.count,
                })
                .collect(),
        }
    }
}

/// `part` as a percentage of `whole` to two decimals, 0 when `whole` is 0.
fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    round2(part as f64 * 100.0 / whole as f64)
}
