use super::*;

/// Tests that a draft update replaces the linked portfolio items.
///
/// Only items owned by the assessment's teacher are linked; another teacher's item
/// id is ignored.
///
/// Expected: Ok with exactly the owned item linked
#[tokio::test]
async fn relinks_owned_items_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other_teacher, other_user) = factory::helpers::create_teacher_account(db).await?;
    let draft = factory::create_self_assessment(db, teacher.id).await?;
    let owned = factory::create_evidence(db, teacher.id, user.id).await?;
    let foreign = factory::create_evidence(db, other_teacher.id, other_user.id).await?;

    let updated = SelfAssessmentService::new(db)
        .update(
            &User::from_entity(user),
            UpdateSelfAssessmentParam {
                id: draft.id,
                strengths: Some("Clear lesson structure".to_string()),
                portfolio_item_ids: Some(vec![owned.id, foreign.id]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.strengths.as_deref(), Some("Clear lesson structure"));
    assert_eq!(updated.portfolio_items.len(), 1);
    assert_eq!(updated.portfolio_items[0].id, owned.id);

    Ok(())
}

/// Tests that a submitted assessment is read-only for its owner.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_submitted() -> Result<(), AppError> {
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
        .update(
            &User::from_entity(user),
            UpdateSelfAssessmentParam {
                id: submitted.id,
                pedagogy_score: Some(5),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
