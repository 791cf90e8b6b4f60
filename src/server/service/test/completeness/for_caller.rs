use super::*;

/// Tests that a TEACHER scores their own linked record.
///
/// Expected: Ok for the caller's teacher with both round-1 indicators
#[tokio::test]
async fn scores_linked_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_catalog(db).await?;
    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;

    let result = CompletenessService::new(db)
        .for_caller(&User::from_entity(user), 1)
        .await?;

    assert_eq!(result.teacher_id, teacher.id);
    assert_eq!(result.indicators.len(), 2);

    Ok(())
}

/// Tests that an account without a teacher profile is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_teacher_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = CompletenessService::new(db)
        .for_caller(&User::from_entity(admin), 1)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
