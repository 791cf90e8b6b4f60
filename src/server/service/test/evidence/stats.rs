use super::*;

/// Tests grouped totals by evidence type and by indicator code.
///
/// Expected: Ok with LESSON_PLAN counted twice ahead of TEACHING_MEDIA, and
/// indicator codes ordered by use then code
#[tokio::test]
async fn groups_by_type_and_indicator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["1.1", "2.1"])
        .build()
        .await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["2.1"])
        .build()
        .await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .evidence_type(EvidenceType::TeachingMedia)
        .build()
        .await?;

    let stats = EvidenceService::new(db, &dir).stats().await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.verified, 0);
    assert_eq!(
        stats.by_type,
        vec![(EvidenceType::LessonPlan, 2), (EvidenceType::TeachingMedia, 1)]
    );
    assert_eq!(
        stats.by_indicator,
        vec![("2.1".to_string(), 2), ("1.1".to_string(), 1)]
    );

    Ok(())
}
