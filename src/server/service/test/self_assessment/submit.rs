use super::*;

/// Tests submitting an owned draft.
///
/// Expected: Ok with status SUBMITTED and `submitted_at` stamped
#[tokio::test]
async fn submits_owned_draft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let draft = factory::create_self_assessment(db, teacher.id).await?;

    let submitted = SelfAssessmentService::new(db)
        .submit(&User::from_entity(user), draft.id)
        .await?;

    assert_eq!(submitted.status, SelfAssessmentStatus::Submitted);
    assert!(submitted.submitted_at.is_some());

    Ok(())
}

/// Tests that another teacher cannot submit the assessment.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_other_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::helpers::create_teacher_account(db).await?;
    let (_, other) = factory::helpers::create_teacher_account(db).await?;
    let draft = factory::create_self_assessment(db, teacher.id).await?;

    let result = SelfAssessmentService::new(db)
        .submit(&User::from_entity(other), draft.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that a submitted assessment cannot be submitted again.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_already_submitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let submitted = factory::self_assessment::SelfAssessmentFactory::new(db, teacher.id)
        .status(SelfAssessmentStatus::Submitted)
        .build()
        .await?;

    let result = SelfAssessmentService::new(db)
        .submit(&User::from_entity(user), submitted.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
