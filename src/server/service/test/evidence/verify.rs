use super::*;

/// Tests that verification may only retag an item with catalog codes.
///
/// Expected: Err(AppError::BadRequest) leaving the item unverified, then Ok with the new tag
#[tokio::test]
async fn retags_only_with_catalog_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let reviewer = factory::create_user(db).await?;
    let evidence = factory::create_evidence(db, teacher.id, user.id).await?;
    factory::create_indicator(db, "PRO_2.2").await?;

    let service = EvidenceService::new(db, &dir);
    let rejected = service
        .verify(VerifyEvidenceParam {
            id: evidence.id,
            verified_by: reviewer.id,
            indicator_codes: Some(vec!["PRO_2.9".to_string()]),
            evidence_type: None,
        })
        .await;
    let unchanged = service.get_by_id(evidence.id).await?;
    let verified = service
        .verify(VerifyEvidenceParam {
            id: evidence.id,
            verified_by: reviewer.id,
            indicator_codes: Some(vec!["PRO_2.2".to_string()]),
            evidence_type: None,
        })
        .await?;

    assert!(matches!(rejected, Err(AppError::BadRequest(_))));
    assert!(!unchanged.is_verified);
    assert!(verified.is_verified);
    assert_eq!(verified.indicator_codes, vec!["PRO_2.2".to_string()]);

    Ok(())
}
