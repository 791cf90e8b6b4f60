use super::*;

/// Tests listing budgets latest fiscal year first with transaction counts.
///
/// Expected: Ok with FY2569 first and counts 0 and 2
#[tokio::test]
async fn lists_with_transaction_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::project_budget::ProjectBudgetFactory::new(db, user.id)
        .fiscal_year(2568)
        .build()
        .await?;
    factory::project_budget::ProjectBudgetFactory::new(db, user.id)
        .fiscal_year(2569)
        .build()
        .await?;
    factory::create_budget_transaction(db, older.id, user.id).await?;
    factory::create_budget_transaction(db, older.id, user.id).await?;

    let repo = ProjectBudgetRepository::new(db);
    let budgets = repo.get_all().await?;

    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0].fiscal_year, 2569);
    assert_eq!(budgets[0].transaction_count, 0);
    assert_eq!(budgets[1].id, older.id);
    assert_eq!(budgets[1].transaction_count, 2);

    Ok(())
}
