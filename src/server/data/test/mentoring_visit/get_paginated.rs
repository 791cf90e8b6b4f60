use super::*;

/// Tests the inclusive visit date range.
///
/// Verifies that visits on both boundary dates are included and visits outside are
/// not, latest first.
///
/// Expected: Ok with the two boundary visits
#[tokio::test]
async fn filters_inclusive_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    for day in [1, 10, 20, 28] {
        factory::mentoring_visit::MentoringVisitFactory::new(db, teacher.id)
            .visit_date(NaiveDate::from_ymd_opt(2025, 2, day).unwrap())
            .build()
            .await?;
    }

    let repo = MentoringVisitRepository::new(db);
    let (visits, total) = repo
        .get_paginated(&MentoringFilter {
            start_date: NaiveDate::from_ymd_opt(2025, 2, 10),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 20),
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(visits[0].visit_date, NaiveDate::from_ymd_opt(2025, 2, 20).unwrap());
    assert_eq!(visits[1].visit_date, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
    assert_eq!(
        visits[0].teacher.as_ref().map(|t| t.id),
        Some(teacher.id)
    );

    Ok(())
}

/// Tests filtering by teacher and visit type.
///
/// Expected: Ok with only the other teacher's observation visit
#[tokio::test]
async fn filters_by_teacher_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, first) = factory::helpers::create_teacher_with_school(db).await?;
    let second = factory::create_teacher(db, school.id).await?;
    factory::create_mentoring_visit(db, first.id).await?;
    factory::mentoring_visit::MentoringVisitFactory::new(db, second.id)
        .visit_type(VisitType::Observation)
        .build()
        .await?;
    factory::create_mentoring_visit(db, second.id).await?;

    let repo = MentoringVisitRepository::new(db);
    let (visits, total) = repo
        .get_paginated(&MentoringFilter {
            teacher_id: Some(second.id),
            visit_type: Some(VisitType::Observation),
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(visits[0].teacher_id, second.id);
    assert_eq!(visits[0].visit_type, VisitType::Observation);

    Ok(())
}
