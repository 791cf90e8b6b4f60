use super::*;

/// Tests that journals come back latest month first and respect the limit.
///
/// Expected: Ok with 2025-06 then 2025-05
#[tokio::test]
async fn orders_by_month_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    for month in ["2025-05", "2025-04", "2025-06"] {
        factory::create_reflective_journal(db, teacher.id, month).await?;
    }

    let repo = ReflectiveJournalRepository::new(db);
    let journals = repo.get_all(Some(teacher.id), Some(2)).await?;

    let months: Vec<&str> = journals.iter().map(|j| j.month.as_str()).collect();
    assert_eq!(months, vec!["2025-06", "2025-05"]);

    Ok(())
}
