use super::*;

/// Tests recording a rejection.
///
/// Expected: Ok(Some) REJECTED with approver, timestamp, and reason
#[tokio::test]
async fn records_rejection() -> Result<(), DbErr> {
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

    let repo = BudgetTransactionRepository::new(db);
    let decided = repo
        .record_decision(ApproveTransactionParam {
            id: transaction.id,
            approved_by: user.id,
            status: TransactionStatus::Rejected,
            rejection_reason: Some("Missing receipt".to_string()),
        })
        .await?
        .expect("transaction exists");

    assert_eq!(decided.status, TransactionStatus::Rejected);
    assert_eq!(decided.approved_by, Some(user.id));
    assert!(decided.approved_at.is_some());
    assert_eq!(decided.rejection_reason.as_deref(), Some("Missing receipt"));

    Ok(())
}
