use super::*;

/// Tests selecting budget allocations by fiscal year.
///
/// Expected: Ok with only the FY2568 budget's id and allocation
#[tokio::test]
async fn filters_by_fiscal_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let wanted = factory::project_budget::ProjectBudgetFactory::new(db, user.id)
        .fiscal_year(2568)
        .total_allocated_satang(5_000_00)
        .build()
        .await?;
    factory::project_budget::ProjectBudgetFactory::new(db, user.id)
        .fiscal_year(2567)
        .build()
        .await?;

    let repo = ProjectBudgetRepository::new(db);
    let allocations = repo.allocations(Some(2568), None).await?;

    assert_eq!(allocations, vec![(wanted.id, 5_000_00)]);

    Ok(())
}
