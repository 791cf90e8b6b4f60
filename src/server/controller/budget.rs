use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        budget::{
            ApproveTransactionDto, BudgetReportDto, BudgetSummaryDto, BudgetSummaryQueryDto,
            BudgetTransactionDto, CreateProjectBudgetDto, CreateTransactionDto,
            FiscalYearQueryDto, PaginatedTransactionsDto, ProjectBudgetDto, TransactionQueryDto,
            UpdateProjectBudgetDto, UpdateTransactionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::budget::{
            ApproveTransactionParam, CreateProjectBudgetParam, CreateTransactionParam,
            TransactionFilter, UpdateProjectBudgetParam, UpdateTransactionParam,
        },
        service::budget::BudgetService,
        state::AppState,
    },
};

/// Tag for grouping budget endpoints in OpenAPI documentation
pub static BUDGET_TAG: &str = "budget";

/// Get all project budgets, latest fiscal year first.
///
/// Each budget carries the number of transactions recorded against it.
#[utoipa::path(
    get,
    path = "/api/budget",
    tag = BUDGET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved budgets", body = Vec<ProjectBudgetDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_budgets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let budgets = BudgetService::new(&state.db).get_budgets().await?;
    let budgets: Vec<ProjectBudgetDto> = budgets.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(budgets)))
}

/// Create a project budget.
///
/// # Access Control
/// - `Manager` - Admins and project managers
///
/// # Returns
/// - `201 Created` - The new budget
/// - `400 Bad Request` - Negative allocation
#[utoipa::path(
    post,
    path = "/api/budget",
    tag = BUDGET_TAG,
    request_body = CreateProjectBudgetDto,
    responses(
        (status = 201, description = "Successfully created budget", body = ProjectBudgetDto),
        (status = 400, description = "Invalid allocation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_budget(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let param = CreateProjectBudgetParam::from_dto(payload, user.id)?;
    let budget = BudgetService::new(&state.db).create_budget(param).await?;

    Ok((StatusCode::CREATED, Json(budget.into_dto())))
}

/// Update a project budget.
///
/// # Access Control
/// - `Manager` - Admins and project managers
#[utoipa::path(
    put,
    path = "/api/budget/{id}",
    tag = BUDGET_TAG,
    params(
        ("id" = i32, Path, description = "Project budget ID")
    ),
    request_body = UpdateProjectBudgetDto,
    responses(
        (status = 200, description = "Successfully updated budget", body = ProjectBudgetDto),
        (status = 400, description = "Invalid allocation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_budget(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let param = UpdateProjectBudgetParam::from_dto(id, payload)?;
    let budget = BudgetService::new(&state.db).update_budget(param).await?;

    Ok((StatusCode::OK, Json(budget.into_dto())))
}

/// Allocation, spending and pending totals.
///
/// Only approved transactions count as used. Remaining never drops below zero.
#[utoipa::path(
    get,
    path = "/api/budget/summary",
    tag = BUDGET_TAG,
    params(BudgetSummaryQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved summary", body = BudgetSummaryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<BudgetSummaryQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = BudgetService::new(&state.db)
        .summary(params.fiscal_year, params.project_budget_id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Spending report with per-category and per-month breakdowns of approved spending.
#[utoipa::path(
    get,
    path = "/api/budget/reports",
    tag = BUDGET_TAG,
    params(FiscalYearQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved report", body = BudgetReportDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FiscalYearQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = BudgetService::new(&state.db)
        .report(params.fiscal_year)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Get paginated transactions, latest transaction date first.
///
/// `entries` defaults to 20 and is capped at 100.
#[utoipa::path(
    get,
    path = "/api/budget/transactions",
    tag = BUDGET_TAG,
    params(TransactionQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved transactions", body = PaginatedTransactionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TransactionQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transactions = BudgetService::new(&state.db)
        .get_transactions(TransactionFilter::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(transactions.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/budget/transactions/{id}",
    tag = BUDGET_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved transaction", body = BudgetTransactionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transaction = BudgetService::new(&state.db).get_transaction(id).await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Record a pending transaction against a budget.
///
/// # Returns
/// - `201 Created` - The new transaction, status PENDING
/// - `400 Bad Request` - Amount below 0.01 baht
/// - `404 Not Found` - Budget does not exist
#[utoipa::path(
    post,
    path = "/api/budget/transactions",
    tag = BUDGET_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully created transaction", body = BudgetTransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Budget not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateTransactionParam::from_dto(payload, user.id)?;
    let transaction = BudgetService::new(&state.db)
        .create_transaction(param)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Update a pending transaction.
#[utoipa::path(
    put,
    path = "/api/budget/transactions/{id}",
    tag = BUDGET_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Successfully updated transaction", body = BudgetTransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Transaction is no longer pending", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = UpdateTransactionParam::from_dto(id, payload)?;
    let transaction = BudgetService::new(&state.db)
        .update_transaction(param)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Delete a pending transaction.
#[utoipa::path(
    delete,
    path = "/api/budget/transactions/{id}",
    tag = BUDGET_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted transaction"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Transaction is no longer pending", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    BudgetService::new(&state.db).delete_transaction(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Approve or reject a pending transaction.
///
/// A rejection must carry a reason.
///
/// # Access Control
/// - `Manager` - Admins and project managers
///
/// # Returns
/// - `200 OK` - The decided transaction
/// - `400 Bad Request` - Rejection without a reason
/// - `403 Forbidden` - Not a manager, or transaction already decided
/// - `404 Not Found` - Transaction does not exist
#[utoipa::path(
    patch,
    path = "/api/budget/transactions/{id}/approve",
    tag = BUDGET_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = ApproveTransactionDto,
    responses(
        (status = 200, description = "Successfully recorded decision", body = BudgetTransactionDto),
        (status = 400, description = "Rejection reason missing", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a manager or already decided", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ApproveTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Manager])
        .await?;

    let param = ApproveTransactionParam::from_dto(id, user.id, payload)?;
    let transaction = BudgetService::new(&state.db)
        .approve_transaction(param)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}
