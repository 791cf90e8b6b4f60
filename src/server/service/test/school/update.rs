use super::*;

/// Tests a partial update that only renames the school.
///
/// Expected: Ok with the new name and the province unchanged
#[tokio::test]
async fn renames_school() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let updated = SchoolService::new(db)
        .update(UpdateSchoolParam {
            id: school.id,
            school_name: Some("Ban Nong School".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.school_name, "Ban Nong School");
    assert_eq!(updated.province, school.province);

    Ok(())
}

/// Tests updating a school that does not exist.
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

    let result = SchoolService::new(db)
        .update(UpdateSchoolParam {
            id: 9_999,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
