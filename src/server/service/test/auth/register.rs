use super::*;

fn register(email: &str, teacher_id: Option<i32>) -> RegisterDto {
    RegisterDto {
        email: email.to_string(),
        password: "Secret@123".to_string(),
        role: UserRole::Teacher,
        full_name: None,
        teacher_id,
    }
}

/// Tests registering a TEACHER account linked to a teacher record.
///
/// Expected: Ok with the link stored
#[tokio::test]
async fn registers_linked_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let user = AuthService::new(db)
        .register(register("new@example.com", Some(teacher.id)))
        .await?;

    assert_eq!(user.role, UserRole::Teacher);
    assert_eq!(user.teacher_id, Some(teacher.id));

    Ok(())
}

/// Tests duplicate emails and unknown teachers.
///
/// Expected: Err(AppError::Conflict) then Err(AppError::NotFound)
#[tokio::test]
async fn rejects_duplicate_email_and_missing_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let service = AuthService::new(db);
    let duplicate = service
        .register(register("TAKEN@example.com", None))
        .await;
    let missing_teacher = service
        .register(register("fresh@example.com", Some(404)))
        .await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    assert!(matches!(missing_teacher, Err(AppError::NotFound(_))));

    Ok(())
}
