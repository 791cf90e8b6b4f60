use super::*;

fn param(id: i32) -> UpdateUserParam {
    UpdateUserParam {
        id,
        role: None,
        full_name: None,
        teacher_id: None,
        is_active: None,
    }
}

/// Tests linking an account to a teacher and changing its role.
///
/// Expected: Ok with the new role and teacher, other fields unchanged
#[tokio::test]
async fn links_teacher_and_changes_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(UpdateUserParam {
            role: Some(UserRole::Teacher),
            teacher_id: Some(teacher.id),
            ..param(user.id)
        })
        .await?;

    assert_eq!(updated.role, UserRole::Teacher);
    assert_eq!(updated.teacher_id, Some(teacher.id));
    assert_eq!(updated.email, user.email);
    assert!(updated.is_active);

    Ok(())
}

/// Tests that an account cannot be linked to a missing teacher.
///
/// Expected: Err(AppError::NotFound) and the link unchanged
#[tokio::test]
async fn rejects_unknown_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update(UpdateUserParam {
            teacher_id: Some(9999),
            ..param(user.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that updating a missing account reports not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).update(param(9999)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
