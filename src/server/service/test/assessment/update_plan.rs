use super::*;

/// Tests that moving one end of a plan past the stored other end is refused.
///
/// The stored plan runs 2025-01-01 to 2025-06-30.
///
/// Expected: Err(AppError::BadRequest) and the stored dates unchanged
#[tokio::test]
async fn rejects_inverted_range_against_stored_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let plan = factory::create_development_plan(db, teacher.id).await?;

    let service = AssessmentService::new(db);
    let result = service
        .update_plan(UpdateDevelopmentPlanParam {
            id: plan.id,
            start_date: Some(date(2025, 7, 1)),
            ..Default::default()
        })
        .await;
    let stored = service.get_plan(plan.id).await?;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(stored.start_date, date(2025, 1, 1));

    Ok(())
}

/// Tests a partial update that keeps the range valid.
///
/// Expected: Ok with the new end date and status, other fields unchanged
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let plan = factory::create_development_plan(db, teacher.id).await?;

    let updated = AssessmentService::new(db)
        .update_plan(UpdateDevelopmentPlanParam {
            id: plan.id,
            end_date: Some(date(2025, 9, 30)),
            progress_status: Some("IN_PROGRESS".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.end_date, date(2025, 9, 30));
    assert_eq!(updated.progress_status, "IN_PROGRESS");
    assert_eq!(updated.focus_competency, plan.focus_competency);

    Ok(())
}
