use super::*;

fn param(school_id: i32, citizen_id: &str) -> CreateTeacherParam {
    CreateTeacherParam {
        citizen_id: citizen_id.to_string(),
        full_name: "Somchai Jaidee".to_string(),
        gender: Gender::Male,
        birth_date: None,
        cohort: 2,
        appointment_date: NaiveDate::from_ymd_opt(2024, 5, 16).unwrap(),
        position: "ครูผู้ช่วย".to_string(),
        major: Some("Mathematics".to_string()),
        email: Some("somchai@example.com".to_string()),
        phone: None,
        school_id,
        status: TeacherStatus::Active,
    }
}

/// Tests creating a teacher and loading them with their school.
///
/// Expected: Ok with the teacher retrievable through `find_with_school`
#[tokio::test]
async fn creates_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;

    let repo = TeacherRepository::new(db);
    let teacher = repo.create(param(school.id, "1103700012345")).await?;

    assert_eq!(teacher.citizen_id, "1103700012345");

    let loaded = repo
        .find_with_school(teacher.id)
        .await?
        .expect("teacher should exist");
    assert_eq!(loaded.school.id, school.id);

    Ok(())
}

/// Tests that a teacher referencing a missing school is rejected.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn rejects_missing_school() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let result = repo.create(param(999, "1103700012345")).await;

    assert!(result.is_err());

    Ok(())
}
