use super::*;

/// Tests creating a journal for a free month.
///
/// Expected: Ok with the month stored and the reflection sanitized
#[tokio::test]
async fn creates_journal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let journal = JournalService::new(db)
        .create(CreateJournalParam::from_dto(create_dto(teacher.id, "2025-03"))?)
        .await?;

    assert_eq!(journal.teacher_id, teacher.id);
    assert_eq!(journal.month, "2025-03");
    assert_eq!(journal.reflection_text, "Tried group work in grade 4 math");

    Ok(())
}

/// Tests a second journal for a month the teacher already wrote.
///
/// Expected: Err(AppError::Conflict) with the month message
#[tokio::test]
async fn rejects_duplicate_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    factory::reflective_journal::create_reflective_journal(db, teacher.id, "2025-03").await?;

    let result = JournalService::new(db)
        .create(CreateJournalParam::from_dto(create_dto(teacher.id, "2025-03"))?)
        .await;

    match result {
        Err(AppError::Conflict(message)) => {
            assert_eq!(message, "Journal for this month already exists")
        }
        other => panic!("Expected Conflict, got: {:?}", other.map(|j| j.id)),
    }

    Ok(())
}

/// Tests that a month outside 01 through 12 never reaches the service.
///
/// Expected: Err(AppError::BadRequest)
#[test]
fn rejects_invalid_month() {
    let result = CreateJournalParam::from_dto(create_dto(1, "2025-13"));

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests a journal for a teacher that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = JournalService::new(db)
        .create(CreateJournalParam::from_dto(create_dto(77, "2025-03"))?)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
