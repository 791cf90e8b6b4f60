use super::*;

/// Tests detecting an existing ADMIN account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, UserRole::Admin).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests that other roles do not count as admins.
///
/// Verifies the first-time setup scenario where only non-admin accounts exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_non_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, UserRole::ProjectManager).await?;
    factory::user::create_user_with_role(db, UserRole::Mentor).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}
