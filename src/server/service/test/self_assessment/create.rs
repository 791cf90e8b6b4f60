use super::*;

/// Tests creating a draft for the caller's own teacher.
///
/// The caller's linked teacher fills in for a missing `teacher_id`, and only the
/// caller's own portfolio items are linked.
///
/// Expected: Ok with a DRAFT for the caller's teacher and one linked item
#[tokio::test]
async fn defaults_to_callers_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other_teacher, other_user) = factory::helpers::create_teacher_account(db).await?;
    let owned = factory::create_evidence(db, teacher.id, user.id).await?;
    let foreign = factory::create_evidence(db, other_teacher.id, other_user.id).await?;

    let created = SelfAssessmentService::new(db)
        .create(
            &User::from_entity(user),
            CreateSelfAssessmentParam {
                teacher_id: None,
                content: content(AssessmentPeriod::Before),
                portfolio_item_ids: vec![owned.id, foreign.id],
            },
        )
        .await?;

    assert_eq!(created.teacher_id, teacher.id);
    assert_eq!(created.status, SelfAssessmentStatus::Draft);
    assert_eq!(created.portfolio_items.len(), 1);
    assert_eq!(created.portfolio_items[0].id, owned.id);

    Ok(())
}

/// Tests creating without any teacher in the request or on the caller.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_a_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = SelfAssessmentService::new(db)
        .create(
            &User::from_entity(admin),
            CreateSelfAssessmentParam {
                teacher_id: None,
                content: content(AssessmentPeriod::Before),
                portfolio_item_ids: Vec::new(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating for a teacher id that does not exist.
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

    let admin = factory::create_user(db).await?;

    let result = SelfAssessmentService::new(db)
        .create(
            &User::from_entity(admin),
            CreateSelfAssessmentParam {
                teacher_id: Some(9_999),
                content: content(AssessmentPeriod::Before),
                portfolio_item_ids: Vec::new(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
