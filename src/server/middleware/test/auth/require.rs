use super::*;

/// Tests a request without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deactivated account.
///
/// Verifies that deactivating a user ends access for sessions created before the
/// account was switched off.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the user's id
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .is_active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a session whose user row no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a mentor calling a manager-only endpoint.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing permission
#[tokio::test]
async fn denies_role_without_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let mentor = factory::user::UserFactory::new(db)
        .role(UserRole::Mentor)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(mentor.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Manager])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, mentor.id);
            assert!(message.contains("Manager"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// A mentor satisfies `Reviewer` but not `Uploader`, so the combined check fails.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let mentor = factory::user::UserFactory::new(db)
        .role(UserRole::Mentor)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(mentor.id).await?;

    let guard = AuthGuard::new(db, session);
    assert!(guard.require(&[Permission::Reviewer]).await.is_ok());

    let result = guard
        .require(&[Permission::Reviewer, Permission::Uploader])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an authenticated project manager on an endpoint they may use.
///
/// Expected: Ok(User) for the session user
#[tokio::test]
async fn grants_access_to_allowed_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let manager = factory::user::UserFactory::new(db)
        .email("pm@example.com")
        .role(UserRole::ProjectManager)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Manager, Permission::Uploader])
        .await?;

    assert_eq!(user.id, manager.id);
    assert_eq!(user.email, "pm@example.com");
    assert_eq!(user.role, UserRole::ProjectManager);

    Ok(())
}

/// Tests that logging out removes the user from the session.
///
/// Expected: Err(AuthError::UserNotInSession) after `clear`
#[tokio::test]
async fn cleared_session_is_unauthenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
