use super::*;

/// Tests that recent visits are limited and ordered latest first.
///
/// Expected: Ok with 2 visits, newest date first
#[tokio::test]
async fn returns_latest_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    for month in [1, 3, 2] {
        factory::mentoring_visit::MentoringVisitFactory::new(db, teacher.id)
            .visit_date(NaiveDate::from_ymd_opt(2025, month, 1).unwrap())
            .build()
            .await?;
    }

    let repo = MentoringVisitRepository::new(db);
    let visits = repo.get_recent(2).await?;

    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].visit_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    assert_eq!(visits[1].visit_date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    assert!(visits[0].teacher.is_some());

    Ok(())
}
