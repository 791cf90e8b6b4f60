use super::*;

/// Tests verifying an item while replacing its codes and type.
///
/// Expected: Ok(Some) verified by the reviewer with only the new codes
#[tokio::test]
async fn verifies_and_replaces_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let mentor = factory::create_user(db).await?;
    let item = factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["1.1", "1.2"])
        .build()
        .await?;

    let repo = EvidenceRepository::new(db);
    let verified = repo
        .verify(VerifyEvidenceParam {
            id: item.id,
            verified_by: mentor.id,
            indicator_codes: Some(vec!["4.1".to_string()]),
            evidence_type: Some(EvidenceType::ActionResearch),
        })
        .await?
        .expect("item exists");

    assert!(verified.is_verified);
    assert_eq!(verified.verified_by, Some(mentor.id));
    assert!(verified.verified_at.is_some());
    assert_eq!(verified.indicator_codes, vec!["4.1"]);
    assert_eq!(verified.evidence_type, EvidenceType::ActionResearch);

    Ok(())
}

/// Tests that verifying without codes keeps the existing ones.
///
/// Expected: Ok(Some) with the original codes
#[tokio::test]
async fn keeps_codes_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let item = factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["2.2"])
        .build()
        .await?;

    let repo = EvidenceRepository::new(db);
    let verified = repo
        .verify(VerifyEvidenceParam {
            id: item.id,
            verified_by: user.id,
            indicator_codes: None,
            evidence_type: None,
        })
        .await?
        .expect("item exists");

    assert_eq!(verified.indicator_codes, vec!["2.2"]);
    assert_eq!(verified.evidence_type, EvidenceType::LessonPlan);

    Ok(())
}
