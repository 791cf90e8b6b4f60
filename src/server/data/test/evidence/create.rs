use super::*;

/// Tests creating a file item with indicator codes.
///
/// Expected: Ok with the codes attached in order and the item unverified
#[tokio::test]
async fn creates_file_item_with_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;

    let repo = EvidenceRepository::new(db);
    let evidence = repo
        .create(CreateEvidenceParam::file(
            teacher.id,
            user.id,
            EvidenceType::LessonPlan,
            vec!["1.1".to_string(), "2.4".to_string()],
            StoredFile {
                original_filename: "lesson-week1.pdf".to_string(),
                stored_filename: "5f0c.pdf".to_string(),
                file_size: 2048,
                mime_type: "application/pdf".to_string(),
            },
        ))
        .await?;

    assert_eq!(evidence.item_type, EvidenceItemType::File);
    assert_eq!(evidence.indicator_codes, vec!["1.1", "2.4"]);
    assert!(!evidence.is_verified);

    let loaded = repo.find_by_id(evidence.id).await?.expect("item exists");
    assert_eq!(loaded.indicator_codes, vec!["1.1", "2.4"]);
    assert_eq!(loaded.stored_filename.as_deref(), Some("5f0c.pdf"));

    Ok(())
}
