use super::*;

/// Tests revoking a granted consent.
///
/// Expected: Ok with status REVOKED
#[tokio::test]
async fn revokes_granted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_consent(db, user.id, ConsentType::DataCollection).await?;

    let consent = ConsentService::new(db)
        .revoke(user.id, ConsentType::DataCollection)
        .await?;

    assert_eq!(consent.status, ConsentStatus::Revoked);

    Ok(())
}

/// Tests revoking twice and revoking a type never recorded.
///
/// Expected: Err(AppError::BadRequest) then Err(AppError::NotFound)
#[tokio::test]
async fn rejects_revoked_and_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .status(ConsentStatus::Revoked)
        .build()
        .await?;

    let service = ConsentService::new(db);
    let again = service.revoke(user.id, ConsentType::DataCollection).await;
    let missing = service.revoke(user.id, ConsentType::Marketing).await;

    assert!(matches!(again, Err(AppError::BadRequest(_))));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
