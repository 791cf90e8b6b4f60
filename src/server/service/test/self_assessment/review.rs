use super::*;

/// Tests reviewing a submitted assessment.
///
/// Expected: Ok with status REVIEWED, the reviewer id, and the comments stored
#[tokio::test]
async fn reviews_submitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::helpers::create_teacher_account(db).await?;
    let mentor = factory::user::create_user_with_role(db, UserRole::Mentor).await?;
    let submitted = factory::self_assessment::SelfAssessmentFactory::new(db, teacher.id)
        .status(SelfAssessmentStatus::Submitted)
        .build()
        .await?;

    let reviewed = SelfAssessmentService::new(db)
        .review(
            &User::from_entity(mentor.clone()),
            submitted.id,
            Some("Good progress".to_string()),
        )
        .await?;

    assert_eq!(reviewed.status, SelfAssessmentStatus::Reviewed);
    assert_eq!(reviewed.reviewed_by, Some(mentor.id));
    assert_eq!(reviewed.reviewer_comments.as_deref(), Some("Good progress"));
    assert!(reviewed.reviewed_at.is_some());

    Ok(())
}

/// Tests that a draft cannot be reviewed before submission.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_draft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::helpers::create_teacher_account(db).await?;
    let mentor = factory::user::create_user_with_role(db, UserRole::Mentor).await?;
    let draft = factory::create_self_assessment(db, teacher.id).await?;

    let result = SelfAssessmentService::new(db)
        .review(&User::from_entity(mentor), draft.id, None)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests reviewing an assessment that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_assessment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mentor = factory::user::create_user_with_role(db, UserRole::Mentor).await?;

    let result = SelfAssessmentService::new(db)
        .review(&User::from_entity(mentor), 999, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
