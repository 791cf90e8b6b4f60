use super::*;

/// Tests a partial account update.
///
/// Verifies that provided fields change and omitted fields keep their values.
///
/// Expected: Ok(Some) with the new role and unchanged email
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("keep@example.com")
        .role(UserRole::Teacher)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParam {
            id: user.id,
            role: Some(UserRole::Mentor),
            full_name: None,
            teacher_id: None,
            is_active: Some(false),
        })
        .await?
        .expect("user should exist");

    assert_eq!(updated.role, UserRole::Mentor);
    assert!(!updated.is_active);
    assert_eq!(updated.email, "keep@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParam {
            id: 999,
            role: Some(UserRole::Admin),
            full_name: None,
            teacher_id: None,
            is_active: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
