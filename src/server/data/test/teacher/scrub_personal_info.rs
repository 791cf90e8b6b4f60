use super::*;

/// Tests scrubbing a teacher's identifying fields.
///
/// Verifies that the name, email, and citizen id are replaced while the record and
/// its school link remain.
///
/// Expected: Ok with the anonymized name and a placeholder citizen id
#[tokio::test]
async fn replaces_identifying_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let teacher = factory::teacher::TeacherFactory::new(db, school.id)
        .email(Some("private@example.com".to_string()))
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    repo.scrub_personal_info(teacher.id).await?;

    let scrubbed = repo.find_by_id(teacher.id).await?.expect("teacher remains");
    assert_eq!(scrubbed.full_name, ANONYMIZED_NAME);
    assert!(scrubbed.email.is_none());
    assert_eq!(scrubbed.citizen_id, format!("X{:012}", teacher.id));
    assert_eq!(scrubbed.citizen_id.len(), 13);
    assert_eq!(scrubbed.school_id, school.id);

    Ok(())
}
