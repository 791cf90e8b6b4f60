use super::*;

/// Tests that only assistant teachers are reported, ordered by province then name.
///
/// Expected: Ok with the two assistant teachers, Chiang Mai before Nan
#[tokio::test]
async fn lists_assistant_teachers_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let nan = factory::create_school(db).await?;
    let chiang_mai = factory::school::SchoolFactory::new(db)
        .province("Chiang Mai")
        .build()
        .await?;
    factory::teacher::TeacherFactory::new(db, nan.id)
        .full_name("Anong")
        .build()
        .await?;
    factory::teacher::TeacherFactory::new(db, chiang_mai.id)
        .full_name("Somchai")
        .build()
        .await?;
    factory::teacher::TeacherFactory::new(db, nan.id)
        .full_name("Senior")
        .position("ครู")
        .build()
        .await?;

    let rows = ReportService::new(db)
        .teacher_assessment(TeacherReportFilter::default())
        .await?;

    let names: Vec<&str> = rows
        .iter()
        .map(|r| r.teacher.teacher.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Somchai", "Anong"]);

    Ok(())
}

/// Tests per-teacher counts and the latest activity date.
///
/// Expected: Ok with one visit, one assessment and the visit date as last activity
/// when it is the most recent record
#[tokio::test]
async fn counts_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let future_visit = NaiveDate::from_ymd_opt(2099, 1, 15).unwrap();
    factory::mentoring_visit::MentoringVisitFactory::new(db, teacher.id)
        .visit_date(future_visit)
        .build()
        .await?;
    factory::competency_assessment::CompetencyAssessmentFactory::new(db, teacher.id)
        .scores([4, 3, 3, 2])
        .build()
        .await?;

    let rows = ReportService::new(db)
        .teacher_assessment(TeacherReportFilter::default())
        .await?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.mentoring_count, 1);
    assert_eq!(row.assessment_count, 1);
    assert_eq!(row.journal_count, 0);
    assert_eq!(row.last_activity_date, Some(future_visit));
    assert!(row.latest_assessment.is_some());

    Ok(())
}

/// Tests the region filter.
///
/// Expected: Ok with no rows when no school is in the region
#[tokio::test]
async fn filters_by_region() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_teacher_with_school(db).await?;

    let rows = ReportService::new(db)
        .teacher_assessment(TeacherReportFilter {
            region: Some(Region::South),
            ..Default::default()
        })
        .await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that each teacher's latest visit and assessment are their own.
///
/// Expected: Ok with each row carrying its teacher's newest visit date, and a
/// teacher without assessments reporting none
#[tokio::test]
async fn picks_latest_records_per_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let first = factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("First")
        .build()
        .await?;
    let second = factory::teacher::TeacherFactory::new(db, school.id)
        .full_name("Second")
        .build()
        .await?;
    for (teacher_id, day) in [(first.id, 3), (first.id, 20), (second.id, 9), (second.id, 1)] {
        factory::mentoring_visit::MentoringVisitFactory::new(db, teacher_id)
            .visit_date(NaiveDate::from_ymd_opt(2025, 4, day).unwrap())
            .build()
            .await?;
    }
    factory::create_competency_assessment(db, first.id).await?;

    let rows = ReportService::new(db)
        .teacher_assessment(TeacherReportFilter::default())
        .await?;

    assert_eq!(rows.len(), 2);
    let latest_visit = |row: &crate::server::model::report::TeacherAssessmentRow| {
        row.latest_mentoring.as_ref().map(|v| v.visit_date)
    };
    assert_eq!(rows[0].teacher.teacher.id, first.id);
    assert_eq!(latest_visit(&rows[0]), NaiveDate::from_ymd_opt(2025, 4, 20));
    assert_eq!(rows[0].mentoring_count, 2);
    assert!(rows[0].latest_assessment.is_some());
    assert_eq!(latest_visit(&rows[1]), NaiveDate::from_ymd_opt(2025, 4, 9));
    assert!(rows[1].latest_assessment.is_none());

    Ok(())
}

/// Tests the province filter applied in the query.
///
/// Expected: Ok with only the Chiang Mai teacher
#[tokio::test]
async fn filters_by_province() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_teacher_with_school(db).await?;
    let chiang_mai = factory::school::SchoolFactory::new(db)
        .province("Chiang Mai")
        .build()
        .await?;
    let wanted = factory::create_teacher(db, chiang_mai.id).await?;

    let rows = ReportService::new(db)
        .teacher_assessment(TeacherReportFilter {
            province: Some("Chiang Mai".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].teacher.teacher.id, wanted.id);

    Ok(())
}
