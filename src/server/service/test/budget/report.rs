use super::*;

/// Tests the spending report breakdown.
///
/// Categories are ordered by amount, largest first, and months are keyed `YYYY-MM`
/// in ascending order. Pending rows are left out.
///
/// Expected: Ok with TRAINING before TRAVEL and two months
#[tokio::test]
async fn breaks_down_approved_spending() -> Result<(), AppError> {
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
        .amount_satang(1_000_00)
        .category(BudgetCategory::Travel)
        .status(TransactionStatus::Approved)
        .transaction_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
        .build()
        .await?;
    factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
        .amount_satang(4_000_00)
        .category(BudgetCategory::Training)
        .status(TransactionStatus::Approved)
        .transaction_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
        .build()
        .await?;
    factory::create_budget_transaction(db, budget.id, user.id).await?;

    let report = BudgetService::new(db).report(None).await?;

    assert_eq!(report.total_used_satang, 5_000_00);
    assert_eq!(report.categories.len(), 2);
    assert_eq!(report.categories[0].category, BudgetCategory::Training);
    assert_eq!(report.categories[1].category, BudgetCategory::Travel);
    let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["2025-01", "2025-03"]);

    Ok(())
}
