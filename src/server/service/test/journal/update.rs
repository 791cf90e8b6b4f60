use super::*;

/// Tests moving a journal onto a month that already has one.
///
/// Keeping the journal's own month is not a conflict.
///
/// Expected: Ok for the unchanged month, Err(AppError::Conflict) for the taken one
#[tokio::test]
async fn rejects_move_to_taken_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let january =
        factory::reflective_journal::create_reflective_journal(db, teacher.id, "2025-01").await?;
    factory::reflective_journal::create_reflective_journal(db, teacher.id, "2025-02").await?;

    let service = JournalService::new(db);
    let same_month = service
        .update(UpdateJournalParam::from_dto(
            january.id,
            UpdateJournalDto {
                month: Some("2025-01".to_string()),
                ..Default::default()
            },
        )?)
        .await?;
    let taken = service
        .update(UpdateJournalParam::from_dto(
            january.id,
            UpdateJournalDto {
                month: Some("2025-02".to_string()),
                ..Default::default()
            },
        )?)
        .await;

    assert_eq!(same_month.month, "2025-01");
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a journal id that does not exist.
///
/// Expected: Err(AppError::NotFound) with the journal message
#[tokio::test]
async fn missing_journal_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = JournalService::new(db)
        .update(UpdateJournalParam::from_dto(5, UpdateJournalDto::default())?)
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Journal with ID 5 not found"),
        other => panic!("Expected NotFound, got: {:?}", other.map(|j| j.id)),
    }

    Ok(())
}
