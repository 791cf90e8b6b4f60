use super::*;

/// Tests retention deletion by creation time.
///
/// Verifies that only journals created before the cutoff are counted and removed.
///
/// Expected: Ok(1) counted, Ok(1) deleted, newer journal kept
#[tokio::test]
async fn removes_only_old_journals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let old = factory::create_reflective_journal(db, teacher.id, "2018-01").await?;
    let recent = factory::create_reflective_journal(db, teacher.id, "2025-01").await?;

    let mut active: entity::reflective_journal::ActiveModel = old.into();
    active.created_at = ActiveValue::Set(Utc::now() - Duration::days(6 * 365));
    active.update(db).await?;

    let cutoff = Utc::now() - Duration::days(5 * 365);
    let repo = ReflectiveJournalRepository::new(db);

    assert_eq!(repo.count_created_before(cutoff).await?, 1);
    assert_eq!(repo.delete_created_before(cutoff).await?, 1);
    assert!(repo.find_by_id(recent.id).await?.is_some());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
