use super::*;

/// Tests the citizen id uniqueness check.
///
/// Verifies that another teacher's id counts as taken while the teacher's own id is
/// ignored when it is excluded.
///
/// Expected: Ok(true) for another teacher, Ok(false) when excluded
#[tokio::test]
async fn detects_other_teachers_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let teacher = factory::teacher::TeacherFactory::new(db, school.id)
        .citizen_id("3100900055555")
        .build()
        .await?;

    let repo = TeacherRepository::new(db);

    assert!(repo.citizen_id_taken("3100900055555", None).await?);
    assert!(!repo
        .citizen_id_taken("3100900055555", Some(teacher.id))
        .await?);
    assert!(!repo.citizen_id_taken("1000000000000", None).await?);

    Ok(())
}
