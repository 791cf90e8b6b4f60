use super::*;

/// Tests teacher resolution per role.
///
/// Expected: own teacher for TEACHER, requested id for ADMIN, BadRequest otherwise
#[tokio::test]
async fn resolves_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let admin = User::from_entity(factory::create_user(db).await?);
    let mentor =
        User::from_entity(factory::user::create_user_with_role(db, UserRole::Mentor).await?);
    let teacher_user = User::from_entity(user);

    assert_eq!(resolve_teacher(&teacher_user, Some(999))?, teacher.id);
    assert_eq!(resolve_teacher(&admin, Some(7))?, 7);
    assert!(matches!(
        resolve_teacher(&admin, None),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        resolve_teacher(&mentor, Some(7)),
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
