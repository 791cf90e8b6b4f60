use super::*;

/// Tests grouping activity counts by PLC level.
///
/// Expected: Ok with levels in ascending order and their counts
#[tokio::test]
async fn groups_counts_by_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    for level in ["SCHOOL", "AREA", "SCHOOL"] {
        let activity = factory::create_plc_activity(db, teacher.id, date).await?;
        let mut active: entity::plc_activity::ActiveModel = activity.into();
        active.plc_level = ActiveValue::Set(level.to_string());
        active.update(db).await?;
    }

    let repo = PlcActivityRepository::new(db);
    let groups = repo.count_by_level().await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].plc_level, "AREA");
    assert_eq!(groups[0].count, 1);
    assert_eq!(groups[1].plc_level, "SCHOOL");
    assert_eq!(groups[1].count, 2);

    Ok(())
}
