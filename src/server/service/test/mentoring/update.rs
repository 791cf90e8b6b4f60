use super::*;

/// Tests updating a visit that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_visit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MentoringService::new(db)
        .update(UpdateMentoringVisitParam {
            id: 9_999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
