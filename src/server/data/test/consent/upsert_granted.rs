use super::*;

fn grant(user_id: i32, consent_type: ConsentType) -> GrantConsentParam {
    GrantConsentParam {
        user_id,
        consent_type,
        privacy_policy_version: Some("2.0".to_string()),
        terms_version: None,
        expires_at: None,
        ip_address: "10.0.0.7".to_string(),
        user_agent: Some("test-agent".to_string()),
    }
}

/// Tests granting a consent the user has not recorded before.
///
/// Expected: Ok with a GRANTED consent carrying the request metadata
#[tokio::test]
async fn inserts_new_consent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_table(entity::prelude::Consent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ConsentRepository::new(db);
    let consent = repo
        .upsert_granted(grant(user.id, ConsentType::Analytics))
        .await?;

    assert_eq!(consent.status, ConsentStatus::Granted);
    assert!(consent.granted_at.is_some());
    assert_eq!(consent.ip_address.as_deref(), Some("10.0.0.7"));
    assert_eq!(consent.privacy_policy_version.as_deref(), Some("2.0"));

    Ok(())
}

/// Tests re-granting a revoked consent.
///
/// Verifies that the existing row is reused rather than a second row inserted.
///
/// Expected: Ok with the same id, GRANTED, and the revocation cleared
#[tokio::test]
async fn regrants_existing_consent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_table(entity::prelude::Consent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let revoked = factory::consent::ConsentFactory::new(db, user.id)
        .consent_type(ConsentType::DataSharing)
        .status(ConsentStatus::Revoked)
        .build()
        .await?;

    let repo = ConsentRepository::new(db);
    let consent = repo
        .upsert_granted(grant(user.id, ConsentType::DataSharing))
        .await?;

    assert_eq!(consent.id, revoked.id);
    assert_eq!(consent.status, ConsentStatus::Granted);
    assert!(consent.revoked_at.is_none());
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}
