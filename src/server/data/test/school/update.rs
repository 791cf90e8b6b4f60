use super::*;

/// Tests a partial school update.
///
/// Expected: Ok(Some) with the new name and the original province
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let repo = SchoolRepository::new(db);
    let updated = repo
        .update(UpdateSchoolParam {
            id: school.id,
            school_name: Some("Renamed".to_string()),
            quality_school_flag: Some(true),
            ..Default::default()
        })
        .await?
        .expect("school should exist");

    assert_eq!(updated.school_name, "Renamed");
    assert!(updated.quality_school_flag);
    assert_eq!(updated.province, school.province);

    Ok(())
}

/// Tests updating a missing school.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    let result = repo
        .update(UpdateSchoolParam {
            id: 42,
            school_name: Some("Nowhere".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
