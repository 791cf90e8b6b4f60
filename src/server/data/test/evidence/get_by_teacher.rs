use super::*;

/// Tests narrowing a teacher's items by indicator code.
///
/// Expected: Ok with only the item tagged with the code
#[tokio::test]
async fn filters_by_indicator_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let tagged = factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["3.2"])
        .build()
        .await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["1.1"])
        .build()
        .await?;

    let repo = EvidenceRepository::new(db);
    let items = repo
        .get_by_teacher(
            teacher.id,
            &EvidenceFilter {
                indicator_code: Some("3.2".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, tagged.id);
    assert_eq!(items[0].indicator_codes, vec!["3.2"]);

    Ok(())
}

/// Tests that another teacher's items are never returned.
///
/// Expected: Ok with only the requested teacher's items
#[tokio::test]
async fn excludes_other_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other, other_user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_evidence(db, teacher.id, user.id).await?;
    factory::create_evidence(db, other.id, other_user.id).await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .evidence_type(EvidenceType::StudentWork)
        .build()
        .await?;

    let repo = EvidenceRepository::new(db);
    let items = repo
        .get_by_teacher(teacher.id, &EvidenceFilter::default())
        .await?;
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.teacher_id == teacher.id));

    let work = repo
        .get_by_teacher(
            teacher.id,
            &EvidenceFilter {
                evidence_type: Some(EvidenceType::StudentWork),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(work.len(), 1);

    Ok(())
}
