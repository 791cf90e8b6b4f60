use super::*;

/// Tests filtering transactions by category and status.
///
/// Expected: Ok with the single approved travel expense
#[tokio::test]
async fn filters_by_category_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    let wanted = factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
        .status(TransactionStatus::Approved)
        .build()
        .await?;
    factory::create_budget_transaction(db, budget.id, user.id).await?;
    factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
        .category(BudgetCategory::Food)
        .status(TransactionStatus::Approved)
        .build()
        .await?;

    let repo = BudgetTransactionRepository::new(db);
    let (transactions, total) = repo
        .get_paginated(&TransactionFilter {
            category: Some(BudgetCategory::Travel),
            status: Some(TransactionStatus::Approved),
            per_page: 20,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(transactions[0].id, wanted.id);

    Ok(())
}

/// Tests ordering by transaction date, latest first.
///
/// Expected: Ok with the March transaction before the January one
#[tokio::test]
async fn orders_by_transaction_date_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    for month in [1, 3] {
        factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
            .transaction_date(NaiveDate::from_ymd_opt(2025, month, 5).unwrap())
            .build()
            .await?;
    }

    let repo = BudgetTransactionRepository::new(db);
    let (transactions, _) = repo
        .get_paginated(&TransactionFilter {
            project_budget_id: Some(budget.id),
            per_page: 20,
            ..Default::default()
        })
        .await?;

    assert_eq!(
        transactions[0].transaction_date,
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    );

    Ok(())
}
