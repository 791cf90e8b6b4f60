use super::*;

/// Tests totals across approved, pending and rejected transactions.
///
/// Rejected amounts count toward neither used nor pending.
///
/// Expected: Ok with used 3,000 baht, pending 1,000 baht over one pending row
#[tokio::test]
async fn sums_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
        .amount_satang(3_000_00)
        .status(TransactionStatus::Approved)
        .build()
        .await?;
    factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
        .amount_satang(500_00)
        .status(TransactionStatus::Rejected)
        .build()
        .await?;
    factory::create_budget_transaction(db, budget.id, user.id).await?;

    let summary = BudgetService::new(db).summary(None, None).await?;

    assert_eq!(summary.budget_count, 1);
    assert_eq!(summary.total_allocated_satang, budget.total_allocated_satang);
    assert_eq!(summary.total_used_satang, 3_000_00);
    assert_eq!(summary.total_pending_satang, 1_000_00);
    assert_eq!(summary.pending_count, 1);
    assert_eq!(
        summary.remaining_satang(),
        budget.total_allocated_satang - 3_000_00
    );

    Ok(())
}

/// Tests that the fiscal year filter excludes other years' budgets.
///
/// Expected: Ok with zero budgets and zero totals
#[tokio::test]
async fn filters_by_fiscal_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::project_budget::ProjectBudgetFactory::new(db, user.id)
        .fiscal_year(2567)
        .build()
        .await?;

    let summary = BudgetService::new(db).summary(Some(2568), None).await?;

    assert_eq!(summary.budget_count, 0);
    assert_eq!(summary.total_allocated_satang, 0);

    Ok(())
}

/// Tests totals over rows whose sum exceeds the satang range.
///
/// Expected: Ok with used pinned at `i64::MAX` instead of overflowing
#[tokio::test]
async fn saturates_oversized_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    for _ in 0..2 {
        factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
            .amount_satang(i64::MAX / 2 + 1)
            .status(TransactionStatus::Approved)
            .build()
            .await?;
    }

    let summary = BudgetService::new(db).summary(None, None).await?;

    assert_eq!(summary.total_used_satang, i64::MAX);
    assert_eq!(summary.remaining_satang(), 0);

    Ok(())
}
