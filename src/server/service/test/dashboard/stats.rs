use super::*;

/// Tests program totals and the region and status breakdowns.
///
/// Expected: Ok with three teachers, two active, two in the north and one in the
/// south, and empty regions and statuses left out
#[tokio::test]
async fn counts_teachers_by_region_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let north = factory::create_school(db).await?;
    let south = factory::school::SchoolFactory::new(db)
        .region(Region::South)
        .build()
        .await?;
    let active = factory::create_teacher(db, north.id).await?;
    factory::teacher::TeacherFactory::new(db, north.id)
        .status(TeacherStatus::Resigned)
        .build()
        .await?;
    factory::create_teacher(db, south.id).await?;
    factory::create_mentoring_visit(db, active.id).await?;
    factory::create_reflective_journal(db, active.id, "2025-06").await?;

    let cache = cache();
    let stats = DashboardService::new(db, &cache).stats().await?;

    assert_eq!(stats.summary.total_teachers, 3);
    assert_eq!(stats.summary.active_teachers, 2);
    assert_eq!(stats.summary.total_schools, 2);
    assert_eq!(stats.summary.total_visits, 1);
    assert_eq!(stats.summary.total_journals, 1);
    assert_eq!(stats.summary.total_plc_activities, 0);

    let regions: Vec<(Region, u64)> = stats
        .teachers_by_region
        .iter()
        .map(|r| (r.region, r.count))
        .collect();
    assert_eq!(regions, vec![(Region::North, 2), (Region::South, 1)]);
    let statuses: Vec<(TeacherStatus, u64)> = stats
        .teachers_by_status
        .iter()
        .map(|s| (s.status, s.count))
        .collect();
    assert_eq!(
        statuses,
        vec![(TeacherStatus::Active, 2), (TeacherStatus::Resigned, 1)]
    );
    assert_eq!(stats.recent_visits.len(), 1);
    assert_eq!(stats.recent_journals.len(), 1);

    Ok(())
}

/// Tests that a second load inside the cache window reuses the first result.
///
/// Expected: Ok with the original teacher count after a new teacher is added
#[tokio::test]
async fn serves_cached_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, _) = factory::helpers::create_teacher_with_school(db).await?;
    let cache = cache();
    let service = DashboardService::new(db, &cache);

    let first = service.stats().await?;
    factory::create_teacher(db, school.id).await?;
    let second = service.stats().await?;

    assert_eq!(first.summary.total_teachers, 1);
    assert_eq!(second, first);

    Ok(())
}
