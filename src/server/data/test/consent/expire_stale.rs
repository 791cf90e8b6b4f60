use super::*;

/// Tests flipping past-due GRANTED consents to EXPIRED.
///
/// Verifies that consents without an expiry, with a future expiry, or already
/// revoked are left alone.
///
/// Expected: Ok(1) with only the past-due consent expired
#[tokio::test]
async fn expires_only_past_due_grants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_teacher_tables()
        .with_table(entity::prelude::Consent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .consent_type(ConsentType::DataCollection)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .consent_type(ConsentType::DataProcessing)
        .expires_at(Some(Utc::now() + Duration::days(30)))
        .build()
        .await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .consent_type(ConsentType::DataSharing)
        .build()
        .await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .consent_type(ConsentType::Marketing)
        .status(ConsentStatus::Revoked)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let repo = ConsentRepository::new(db);
    assert_eq!(repo.expire_stale(Some(user.id)).await?, 1);

    let collection = repo
        .find_by_type(user.id, ConsentType::DataCollection)
        .await?
        .expect("consent exists");
    assert_eq!(collection.status, ConsentStatus::Expired);

    let processing = repo
        .find_by_type(user.id, ConsentType::DataProcessing)
        .await?
        .expect("consent exists");
    assert_eq!(processing.status, ConsentStatus::Granted);

    Ok(())
}
