use super::*;

/// Tests deleting a school that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SchoolService::new(db).delete(9_999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
