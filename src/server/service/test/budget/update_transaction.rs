use super::*;

/// Tests that a pending transaction can be edited.
///
/// Expected: Ok with the new amount and untouched description
#[tokio::test]
async fn updates_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    let transaction = factory::create_budget_transaction(db, budget.id, user.id).await?;

    let updated = BudgetService::new(db)
        .update_transaction(UpdateTransactionParam {
            id: transaction.id,
            amount_satang: Some(1_500_00),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.amount_satang, 1_500_00);
    assert_eq!(updated.description, transaction.description);

    Ok(())
}

/// Tests that approved transactions are locked.
///
/// Expected: Err(AppError::Forbidden) for update and delete
#[tokio::test]
async fn rejects_decided_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let budget = factory::create_project_budget(db, user.id).await?;
    let approved =
        factory::budget_transaction::BudgetTransactionFactory::new(db, budget.id, user.id)
            .status(TransactionStatus::Approved)
            .build()
            .await?;

    let service = BudgetService::new(db);
    let update = service
        .update_transaction(UpdateTransactionParam {
            id: approved.id,
            amount_satang: Some(1),
            ..Default::default()
        })
        .await;
    let delete = service.delete_transaction(approved.id).await;

    assert!(matches!(update, Err(AppError::Forbidden(_))));
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests editing a transaction that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_budget_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BudgetService::new(db)
        .update_transaction(UpdateTransactionParam {
            id: 42,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
