use super::*;

/// Tests that only APPROVED transactions feed reports.
///
/// Expected: Ok with the single approved entry
#[tokio::test]
async fn returns_only_approved() -> Result<(), DbErr> {
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
        .amount_satang(2_500_00)
        .category(BudgetCategory::Training)
        .status(TransactionStatus::Approved)
        .build()
        .await?;
    factory::create_budget_transaction(db, budget.id, user.id).await?;

    let repo = BudgetTransactionRepository::new(db);
    let entries = repo.approved_entries(vec![budget.id]).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1, 2_500_00);
    assert_eq!(entries[0].2, BudgetCategory::Training);

    let all = repo.amounts_by_status(vec![budget.id]).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
