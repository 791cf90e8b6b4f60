use super::*;

/// Tests that a lapsed grant no longer counts and reads back as EXPIRED.
///
/// Expected: Ok(false), and the stored status becomes EXPIRED
#[tokio::test]
async fn lapsed_grant_expires_on_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::consent::ConsentFactory::new(db, user.id)
        .expires_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let service = ConsentService::new(db);

    assert!(!service
        .has_consent(user.id, ConsentType::DataCollection)
        .await?);
    let consents = service.get_consents(user.id).await?;
    assert_eq!(consents[0].status, ConsentStatus::Expired);

    Ok(())
}

/// Tests the summary's required-consent statuses.
///
/// Expected: Ok with one GRANTED entry and the rest PENDING
#[tokio::test]
async fn summary_defaults_missing_to_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_consent(db, user.id, ConsentType::DataCollection).await?;

    let summary = ConsentService::new(db).summary(user.id).await?;

    assert_eq!(summary.total, 1);
    assert_eq!(summary.granted, 1);
    assert_eq!(
        summary
            .required
            .iter()
            .filter(|s| **s == ConsentStatus::Granted)
            .count(),
        1
    );
    assert_eq!(
        summary
            .required
            .iter()
            .filter(|s| **s == ConsentStatus::Pending)
            .count(),
        2
    );

    Ok(())
}
