use super::*;

/// Tests listing one teacher's assessments with the teacher summary attached.
///
/// Expected: Ok with only that teacher's assessments, each carrying the summary
#[tokio::test]
async fn filters_by_teacher_with_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (school, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let other = factory::create_teacher(db, school.id).await?;
    factory::create_competency_assessment(db, teacher.id).await?;
    factory::create_competency_assessment(db, teacher.id).await?;
    factory::create_competency_assessment(db, other.id).await?;

    let repo = CompetencyAssessmentRepository::new(db);
    let assessments = repo.get_all(Some(teacher.id)).await?;

    assert_eq!(assessments.len(), 2);
    for assessment in &assessments {
        let summary = assessment.teacher.as_ref().expect("teacher attached");
        assert_eq!(summary.id, teacher.id);
        assert_eq!(summary.full_name, teacher.full_name);
    }

    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}

/// Tests that the latest assessment is the most recently created.
///
/// Expected: Ok(Some) with the second assessment
#[tokio::test]
async fn finds_latest_assessment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    factory::create_competency_assessment(db, teacher.id).await?;
    let latest = factory::competency_assessment::CompetencyAssessmentFactory::new(db, teacher.id)
        .scores([5, 5, 4, 4])
        .build()
        .await?;

    let repo = CompetencyAssessmentRepository::new(db);
    let found = repo
        .find_latest_by_teacher(teacher.id)
        .await?
        .expect("assessment exists");

    assert_eq!(found.id, latest.id);
    assert_eq!(found.average_score(), 4.5);

    Ok(())
}
