use super::*;

/// Tests creating an account.
///
/// Verifies that the repository persists the account as active with no last login
/// recorded.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "mentor@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Mentor,
            full_name: Some("Mentor One".to_string()),
            teacher_id: None,
        })
        .await?;

    assert_eq!(user.email, "mentor@example.com");
    assert_eq!(user.role, UserRole::Mentor);
    assert!(user.is_active);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that a second account with the same email is rejected by the database.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("dup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "dup@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Teacher,
            full_name: None,
            teacher_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
