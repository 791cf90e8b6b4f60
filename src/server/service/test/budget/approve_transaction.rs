use super::*;

/// Tests rejecting a pending transaction.
///
/// Expected: Ok with status REJECTED, the approver stamped and the reason stored
#[tokio::test]
async fn rejects_with_reason() -> Result<(), AppError> {
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

    let decided = BudgetService::new(db)
        .approve_transaction(ApproveTransactionParam {
            id: transaction.id,
            approved_by: user.id,
            status: TransactionStatus::Rejected,
            rejection_reason: Some("Missing receipt".to_string()),
        })
        .await?;

    assert_eq!(decided.status, TransactionStatus::Rejected);
    assert_eq!(decided.approved_by, Some(user.id));
    assert_eq!(decided.rejection_reason.as_deref(), Some("Missing receipt"));

    Ok(())
}

/// Tests that a decision cannot be made twice.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_second_decision() -> Result<(), AppError> {
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

    let service = BudgetService::new(db);
    let approve = ApproveTransactionParam {
        id: transaction.id,
        approved_by: user.id,
        status: TransactionStatus::Approved,
        rejection_reason: None,
    };
    service.approve_transaction(approve.clone()).await?;
    let result = service.approve_transaction(approve).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
