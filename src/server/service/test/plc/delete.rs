use super::*;

/// Tests deleting and then updating an activity that no longer exists.
///
/// Expected: Ok for the first delete, Err(AppError::NotFound) for the repeat delete
/// and the update
#[tokio::test]
async fn missing_activity_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let activity =
        factory::create_plc_activity(db, teacher.id, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
            .await?;
    let service = PlcService::new(db);

    service.delete(activity.id).await?;
    let again = service.delete(activity.id).await;
    let update = service
        .update(UpdatePlcActivityParam {
            id: activity.id,
            ..Default::default()
        })
        .await;

    assert!(matches!(again, Err(AppError::NotFound(_))));
    assert!(matches!(update, Err(AppError::NotFound(_))));

    Ok(())
}
