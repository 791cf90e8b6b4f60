use super::*;

/// Tests that granting again replaces the earlier record of the same type.
///
/// Expected: Ok, one DATA_COLLECTION record, GRANTED with the new policy version
#[tokio::test]
async fn regrant_replaces_revoked_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .status(ConsentStatus::Revoked)
        .build()
        .await?;

    let service = ConsentService::new(db);
    let consent = service
        .grant(GrantConsentParam {
            user_id: user.id,
            consent_type: ConsentType::DataCollection,
            privacy_policy_version: Some("2.0".to_string()),
            terms_version: None,
            expires_at: None,
            ip_address: "127.0.0.1".to_string(),
            user_agent: None,
        })
        .await?;

    assert_eq!(consent.status, ConsentStatus::Granted);
    assert_eq!(consent.privacy_policy_version.as_deref(), Some("2.0"));
    assert_eq!(service.get_consents(user.id).await?.len(), 1);

    Ok(())
}
