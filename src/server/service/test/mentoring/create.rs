use super::*;

/// Tests recording a visit for an existing teacher.
///
/// Expected: Ok with the visit attached to the teacher
#[tokio::test]
async fn records_visit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let visit = MentoringService::new(db).create(visit_for(teacher.id)).await?;

    assert_eq!(visit.teacher_id, teacher.id);
    assert_eq!(visit.visit_type, VisitType::Coaching);

    Ok(())
}

/// Tests recording a visit for a teacher id that does not exist.
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

    let result = MentoringService::new(db).create(visit_for(9_999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
