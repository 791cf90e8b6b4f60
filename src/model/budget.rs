use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{BudgetCategory, TransactionStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Amounts are in baht with two decimals; storage is integer satang.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProjectBudgetDto {
    pub id: i32,
    pub fiscal_year: i32,
    pub name: String,
    pub total_allocated: f64,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: i32,
    pub transaction_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateProjectBudgetDto {
    pub fiscal_year: i32,
    pub name: String,
    pub total_allocated: f64,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateProjectBudgetDto {
    pub fiscal_year: Option<i32>,
    pub name: Option<String>,
    pub total_allocated: Option<f64>,
    pub funding_source: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BudgetTransactionDto {
    pub id: i32,
    pub project_budget_id: i32,
    pub transaction_date: NaiveDate,
    pub amount: f64,
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTransactionsDto {
    pub transactions: Vec<BudgetTransactionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTransactionDto {
    pub project_budget_id: i32,
    pub transaction_date: NaiveDate,
    pub amount: f64,
    pub category: BudgetCategory,
    pub description: String,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTransactionDto {
    pub transaction_date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub category: Option<BudgetCategory>,
    pub description: Option<String>,
    pub recipient: Option<String>,
    pub receipt_number: Option<String>,
    pub related_activity_type: Option<String>,
    pub related_activity_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ApproveTransactionDto {
    pub approve: bool,
    /// Required when `approve` is false
    pub rejection_reason: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct TransactionQueryDto {
    pub category: Option<BudgetCategory>,
    pub status: Option<TransactionStatus>,
    pub project_budget_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Page number, 0-based (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_transaction_entries")]
    pub entries: u64,
}

fn default_transaction_entries() -> u64 {
    20
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct BudgetSummaryQueryDto {
    pub fiscal_year: Option<i32>,
    pub project_budget_id: Option<i32>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct FiscalYearQueryDto {
    pub fiscal_year: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BudgetSummaryDto {
    pub total_allocated: f64,
    pub total_used: f64,
    pub total_pending: f64,
    pub total_remaining: f64,
    pub pending_count: u64,
    pub budget_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CategoryBreakdownDto {
    pub category: BudgetCategory,
    pub amount: f64,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonthlyBreakdownDto {
    /// Month in `YYYY-MM` form
    pub month: String,
    pub amount: f64,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BudgetReportDto {
    pub fiscal_year: Option<i32>,
    pub total_allocated: f64,
    pub total_used: f64,
    pub usage_percentage: f64,
    pub category_breakdown: Vec<CategoryBreakdownDto>,
    pub monthly_breakdown: Vec<MonthlyBreakdownDto>,
}
