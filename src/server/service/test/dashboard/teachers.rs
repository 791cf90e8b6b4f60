use super::*;

/// Tests per-teacher activity counts on the overview.
///
/// Expected: Ok with each teacher's own counts and zeros for a teacher with no
/// activity
#[tokio::test]
async fn counts_activity_per_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let busy = factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Busy")
        .build()
        .await?;
    let idle = factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Idle")
        .build()
        .await?;
    factory::create_mentoring_visit(db, busy.id).await?;
    factory::create_mentoring_visit(db, busy.id).await?;
    factory::create_reflective_journal(db, busy.id, "2025-05").await?;
    factory::create_competency_assessment(db, busy.id).await?;
    factory::create_plc_activity(db, busy.id, chrono::NaiveDate::from_ymd_opt(2025, 5, 2).unwrap())
        .await?;

    let cache = cache();
    let overview = DashboardService::new(db, &cache).teachers().await?;

    assert_eq!(overview.len(), 2);
    let busy_row = overview.iter().find(|t| t.id == busy.id).unwrap();
    assert_eq!(busy_row.visits_count, 2);
    assert_eq!(busy_row.journals_count, 1);
    assert_eq!(busy_row.assessments_count, 1);
    assert_eq!(busy_row.plc_count, 1);
    assert_eq!(busy_row.school_name, school.school_name);
    let idle_row = overview.iter().find(|t| t.id == idle.id).unwrap();
    assert_eq!(idle_row.visits_count, 0);
    assert_eq!(idle_row.journals_count, 0);

    Ok(())
}
