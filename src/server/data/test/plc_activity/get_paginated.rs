use super::*;

/// Tests paging activities latest PLC date first.
///
/// Expected: Ok with the newest activity alone on page 0 and a total of 3
#[tokio::test]
async fn pages_by_plc_date_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    for day in [5, 25, 15] {
        factory::create_plc_activity(db, teacher.id, NaiveDate::from_ymd_opt(2025, 4, day).unwrap())
            .await?;
    }

    let repo = PlcActivityRepository::new(db);
    let (activities, total) = repo
        .get_paginated(&PlcFilter {
            teacher_id: Some(teacher.id),
            per_page: 1,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].plc_date, NaiveDate::from_ymd_opt(2025, 4, 25).unwrap());

    Ok(())
}
