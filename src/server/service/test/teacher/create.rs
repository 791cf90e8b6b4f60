use super::*;

/// Tests creating a teacher with valid input.
///
/// Expected: Ok with the persisted teacher and a sanitized name
#[tokio::test]
async fn creates_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::school::create_school(db).await?;

    let teacher = TeacherService::new(db)
        .create(CreateTeacherParam::from_dto(create_dto(
            school.id,
            "1100700000001",
        )))
        .await?;

    assert!(teacher.id > 0);
    assert_eq!(teacher.full_name, "Somchai Jaidee");
    assert_eq!(teacher.school_id, school.id);

    Ok(())
}

/// Tests that a malformed or duplicate citizen id is rejected.
///
/// Expected: Err(AppError::BadRequest) for 12 digits, Err(AppError::Conflict) for a reused id
#[tokio::test]
async fn rejects_bad_and_duplicate_citizen_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let school = factory::school::create_school(db).await?;
    factory::teacher::TeacherFactory::new(db, school.id)
        .citizen_id("1100700000002")
        .build()
        .await?;

    let service = TeacherService::new(db);
    let short = service
        .create(CreateTeacherParam::from_dto(create_dto(school.id, "110070000000")))
        .await;
    let duplicate = service
        .create(CreateTeacherParam::from_dto(create_dto(
            school.id,
            "1100700000002",
        )))
        .await;

    assert!(matches!(short, Err(AppError::BadRequest(_))));
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a teacher in a school that does not exist.
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

    let result = TeacherService::new(db)
        .create(CreateTeacherParam::from_dto(create_dto(99, "1100700000003")))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "School with ID 99 not found"),
        other => panic!("Expected NotFound, got: {:?}", other.map(|t| t.id)),
    }

    Ok(())
}
