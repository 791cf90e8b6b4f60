use super::*;

/// Tests logging an activity for an existing teacher.
///
/// Expected: Ok with the activity stored for the teacher
#[tokio::test]
async fn logs_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let activity = PlcService::new(db).create(activity_for(teacher.id)).await?;

    assert_eq!(activity.teacher_id, teacher.id);
    assert_eq!(activity.topic, "Active learning");

    Ok(())
}

/// Tests logging an activity for a teacher id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlcService::new(db).create(activity_for(9_999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
