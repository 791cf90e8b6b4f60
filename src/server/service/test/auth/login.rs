use super::*;

/// Tests a successful login with a mixed-case email.
///
/// Expected: Ok with the profile and `last_login` stamped
#[tokio::test]
async fn logs_in_with_normalized_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("mentor@example.com")
        .password_hash(hash_password("Secret@123")?)
        .build()
        .await?;

    let profile = AuthService::new(db)
        .login(LoginDto {
            email: " Mentor@Example.com ".to_string(),
            password: "Secret@123".to_string(),
        })
        .await?;

    assert_eq!(profile.user.id, user.id);
    assert!(profile.user.last_login.is_some());
    assert!(profile.teacher.is_none());

    Ok(())
}

/// Tests that a wrong password and an inactive account are both rejected.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_bad_password_and_inactive_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = hash_password("Secret@123")?;
    factory::user::UserFactory::new(db)
        .email("active@example.com")
        .password_hash(hash.clone())
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("inactive@example.com")
        .password_hash(hash)
        .is_active(false)
        .build()
        .await?;

    let service = AuthService::new(db);
    let wrong_password = service
        .login(LoginDto {
            email: "active@example.com".to_string(),
            password: "Wrong@1234".to_string(),
        })
        .await;
    let inactive = service
        .login(LoginDto {
            email: "inactive@example.com".to_string(),
            password: "Secret@123".to_string(),
        })
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        inactive,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests a login for an email with no account.
///
/// Expected: Err(AuthError::InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login(LoginDto {
            email: "nobody@example.com".to_string(),
            password: "Secret@123".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
