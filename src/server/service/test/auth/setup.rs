use super::*;

fn setup(code: &str) -> SetupDto {
    SetupDto {
        code: code.to_string(),
        email: "admin@example.com".to_string(),
        password: "Secret@123".to_string(),
        full_name: Some("First Admin".to_string()),
    }
}

/// Tests redeeming the setup code for the first admin.
///
/// Expected: Ok with an ADMIN account, and the code cannot be reused
#[tokio::test]
async fn creates_first_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let admin = AuthService::new(db).setup(&codes, setup(&code)).await?;

    assert_eq!(admin.role, UserRole::Admin);
    assert!(!codes.has_valid_code().await);

    Ok(())
}

/// Tests that setup is closed once an admin exists, even with a valid code.
///
/// Expected: Err(AuthError::AdminAlreadyExists) and the code left unconsumed
#[tokio::test]
async fn rejects_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let result = AuthService::new(db).setup(&codes, setup(&code)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminAlreadyExists))
    ));
    assert!(codes.has_valid_code().await);

    Ok(())
}

/// Tests a wrong code.
///
/// Expected: Err(AuthError::InvalidSetupCode)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    codes.generate().await;

    let result = AuthService::new(db).setup(&codes, setup("not-the-code")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSetupCode))
    ));

    Ok(())
}
