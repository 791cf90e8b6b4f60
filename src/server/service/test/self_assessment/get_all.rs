use super::*;

/// Tests that a teacher only ever sees their own assessments.
///
/// A `teacher_id` naming someone else is overridden by the caller's teacher.
///
/// Expected: Ok with only the caller's assessment
#[tokio::test]
async fn scopes_teachers_to_their_own() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other_teacher, _) = factory::helpers::create_teacher_account(db).await?;
    let own = factory::create_self_assessment(db, teacher.id).await?;
    factory::create_self_assessment(db, other_teacher.id).await?;

    let listed = SelfAssessmentService::new(db)
        .get_all(
            &User::from_entity(user),
            SelfAssessmentFilter {
                teacher_id: Some(other_teacher.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, own.id);

    Ok(())
}

/// Tests that a teacher-role caller without a linked teacher is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_teacher_profile_for_teachers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Teacher)
        .build()
        .await?;

    let result = SelfAssessmentService::new(db)
        .get_all(&User::from_entity(user), SelfAssessmentFilter::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that reviewers may filter by any teacher, or list everyone.
///
/// Expected: Ok with one row for the named teacher and two rows unfiltered
#[tokio::test]
async fn reviewers_see_any_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, _) = factory::helpers::create_teacher_account(db).await?;
    let (other_teacher, _) = factory::helpers::create_teacher_account(db).await?;
    factory::create_self_assessment(db, teacher.id).await?;
    factory::self_assessment::SelfAssessmentFactory::new(db, other_teacher.id)
        .status(SelfAssessmentStatus::Submitted)
        .build()
        .await?;
    let mentor = User::from_entity(
        factory::user::UserFactory::new(db)
            .role(UserRole::Mentor)
            .build()
            .await?,
    );
    let service = SelfAssessmentService::new(db);

    let named = service
        .get_all(
            &mentor,
            SelfAssessmentFilter {
                teacher_id: Some(other_teacher.id),
                ..Default::default()
            },
        )
        .await?;
    let everyone = service
        .get_all(&mentor, SelfAssessmentFilter::default())
        .await?;

    assert_eq!(named.len(), 1);
    assert_eq!(named[0].teacher_id, other_teacher.id);
    assert_eq!(everyone.len(), 2);

    Ok(())
}
