use super::*;

/// Tests activity counts and the latest assessment for a teacher.
///
/// Expected: Ok with one visit, two journals, no PLC sessions, and the assessment
#[tokio::test]
async fn counts_teacher_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    factory::mentoring_visit::create_mentoring_visit(db, teacher.id).await?;
    factory::reflective_journal::create_reflective_journal(db, teacher.id, "2025-01").await?;
    factory::reflective_journal::create_reflective_journal(db, teacher.id, "2025-02").await?;
    let assessment =
        factory::competency_assessment::create_competency_assessment(db, teacher.id).await?;

    let stats = TeacherService::new(db).get_statistics(teacher.id).await?;

    assert_eq!(stats.visits_count, 1);
    assert_eq!(stats.journals_count, 2);
    assert_eq!(stats.plc_count, 0);
    assert_eq!(stats.latest_assessment.map(|a| a.id), Some(assessment.id));

    Ok(())
}

/// Tests statistics for a teacher id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_teacher_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherService::new(db).get_statistics(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
