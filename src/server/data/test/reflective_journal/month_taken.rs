use super::*;

/// Tests the one-journal-per-month check.
///
/// Verifies that the month counts as taken for the same teacher, is free for another
/// teacher, and is free when the journal holding it is excluded.
///
/// Expected: Ok(true) only for the other journal of the same teacher
#[tokio::test]
async fn checks_teacher_and_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let other = factory::create_teacher(db, school.id).await?;
    let journal = factory::create_reflective_journal(db, teacher.id, "2025-03").await?;

    let repo = ReflectiveJournalRepository::new(db);

    assert!(repo.month_taken(teacher.id, "2025-03", None).await?);
    assert!(!repo.month_taken(other.id, "2025-03", None).await?);
    assert!(!repo
        .month_taken(teacher.id, "2025-03", Some(journal.id))
        .await?);

    Ok(())
}
