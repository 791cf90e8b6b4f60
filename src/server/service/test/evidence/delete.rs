use super::*;

/// Tests deleting an item removes its row and its stored file.
///
/// Expected: Ok, then NotFound on lookup and no file on disk
#[tokio::test]
async fn removes_row_and_file() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let evidence = factory::create_evidence(db, teacher.id, user.id).await?;
    let stored = evidence.stored_filename.clone().unwrap();
    tokio::fs::write(dir.join(&stored), b"data").await?;

    let service = EvidenceService::new(db, &dir);
    service.delete(&User::from_entity(user), evidence.id).await?;

    assert!(matches!(
        service.get_by_id(evidence.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(!tokio::fs::try_exists(dir.join(&stored)).await?);

    Ok(())
}

/// Tests that a TEACHER cannot delete another teacher's item.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_other_teachers_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (_, other_user) = factory::helpers::create_teacher_account(db).await?;
    let evidence = factory::create_evidence(db, teacher.id, user.id).await?;

    let result = EvidenceService::new(db, &dir)
        .delete(&User::from_entity(other_user), evidence.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
