use super::*;

/// Tests that deleting a school removes its teachers by cascade.
///
/// Expected: Ok(true) and no teachers left for the school
#[tokio::test]
async fn deletes_school_and_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let repo = SchoolRepository::new(db);
    assert!(repo.delete(school.id).await?);
    assert!(repo.find_by_id(school.id).await?.is_none());

    let teacher_repo = crate::server::data::teacher::TeacherRepository::new(db);
    assert!(teacher_repo.find_by_id(teacher.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing school.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    assert!(!repo.delete(7).await?);

    Ok(())
}
