use super::*;

/// Tests uploading a file as a TEACHER.
///
/// The item is recorded against the caller's teacher, the type is inferred from the
/// file name, and the bytes land in the upload directory under the stored name.
///
/// Expected: Ok with LESSON_PLAN type and the file on disk
#[tokio::test]
async fn stores_file_for_own_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_indicator(db, "PRO_1.1").await?;
    factory::create_indicator(db, "PRO_2.3").await?;

    let evidence = EvidenceService::new(db, &dir)
        .upload(
            &User::from_entity(user),
            None,
            None,
            vec![
                " PRO_1.1 ".to_string(),
                "PRO_1.1".to_string(),
                "PRO_2.3_DOC".to_string(),
            ],
            UploadedFile {
                filename: "lesson-week1.pdf".to_string(),
                content_type: None,
                data: b"%PDF-1.4".to_vec(),
            },
        )
        .await?;

    assert_eq!(evidence.teacher_id, teacher.id);
    assert_eq!(evidence.evidence_type, EvidenceType::LessonPlan);
    assert_eq!(evidence.file_size, Some(8));
    assert_eq!(evidence.mime_type.as_deref(), Some("application/pdf"));
    assert_eq!(evidence.indicator_codes.len(), 2);

    let stored = evidence.stored_filename.unwrap();
    assert!(stored.ends_with(".pdf"));
    assert!(tokio::fs::try_exists(dir.join(&stored)).await?);

    Ok(())
}

/// Tests that disallowed extensions are refused before anything is written.
///
/// Expected: Err(AppError::BadRequest) and an empty upload directory
#[tokio::test]
async fn rejects_disallowed_extension() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, user) = factory::helpers::create_teacher_account(db).await?;

    let result = EvidenceService::new(db, &dir)
        .upload(
            &User::from_entity(user),
            None,
            None,
            Vec::new(),
            UploadedFile {
                filename: "payload.exe".to_string(),
                content_type: None,
                data: vec![0x4d, 0x5a],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let mut entries = tokio::fs::read_dir(&dir).await?;
    assert!(entries.next_entry().await?.is_none());

    Ok(())
}

/// Tests that a tag outside the active catalog is refused before the file is written.
///
/// Expected: Err(AppError::BadRequest) naming the unknown code and an empty upload directory
#[tokio::test]
async fn rejects_unknown_indicator_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_indicator(db, "PRO_1.1").await?;

    let result = EvidenceService::new(db, &dir)
        .upload(
            &User::from_entity(user),
            None,
            None,
            vec!["PRO_1.1".to_string(), "PRO_9.9".to_string()],
            UploadedFile {
                filename: "lesson-week1.pdf".to_string(),
                content_type: None,
                data: b"%PDF-1.4".to_vec(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg.contains("PRO_9.9")));
    let mut entries = tokio::fs::read_dir(&dir).await?;
    assert!(entries.next_entry().await?.is_none());

    Ok(())
}
