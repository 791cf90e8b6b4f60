use super::*;

/// Tests the CSV export.
///
/// Expected: Ok with `content` set, `data` empty and a `key,value` header row
#[tokio::test]
async fn csv_export_flattens_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (_, user) = factory::helpers::create_teacher_account(db).await?;
    let email = user.email.clone();

    let export = PdpaService::new(db, &dir)
        .export(User::from_entity(user), ExportFormat::Csv)
        .await?;

    assert!(export.data.is_none());
    let content = export.content.unwrap();
    assert!(content.starts_with("\"key\",\"value\""));
    assert!(content.contains(&email));

    Ok(())
}

/// Tests the JSON export.
///
/// Expected: Ok with `data` set and no `content`
#[tokio::test]
async fn json_export_embeds_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (_, user) = factory::helpers::create_teacher_account(db).await?;

    let export = PdpaService::new(db, &dir)
        .export(User::from_entity(user), ExportFormat::Json)
        .await?;

    assert!(export.data.is_some());
    assert!(export.content.is_none());

    Ok(())
}
