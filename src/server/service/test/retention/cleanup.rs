use super::*;

/// Tests a dry run followed by a real cleanup.
///
/// A six-year-old journal is past the five-year period; a six-year-old assessment is
/// still inside the seven-year one.
///
/// Expected: dry run counts 1 and deletes nothing, cleanup then deletes the journal only
#[tokio::test]
async fn dry_run_counts_then_cleanup_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let six_years_ago = Utc::now() - Duration::days(6 * 365);

    let journal = factory::create_reflective_journal(db, teacher.id, "2019-06").await?;
    let mut active: entity::reflective_journal::ActiveModel = journal.into();
    active.created_at = ActiveValue::Set(six_years_ago);
    active.update(db).await?;

    let assessment = factory::create_competency_assessment(db, teacher.id).await?;
    let mut active: entity::competency_assessment::ActiveModel = assessment.into();
    active.created_at = ActiveValue::Set(six_years_ago);
    active.update(db).await?;

    factory::create_reflective_journal(db, teacher.id, "2025-06").await?;

    let service = RetentionService::new(db, Path::new("retention-test-uploads"));

    let dry_run = service.cleanup(true).await?;
    assert_eq!(dry_run.reflective_journals, 1);
    assert_eq!(dry_run.competency_assessments, 0);
    assert_eq!(dry_run.total(), 1);

    let stats = service.stats().await?;
    assert_eq!(stats.reflective_journals.total, 2);
    assert_eq!(stats.competency_assessments.total, 1);

    let deleted = service.cleanup(false).await?;
    assert_eq!(deleted.reflective_journals, 1);
    assert_eq!(deleted.evidence_portfolio, 0);
    assert_eq!(deleted.competency_assessments, 0);

    let stats = service.stats().await?;
    assert_eq!(stats.reflective_journals.total, 1);
    assert_eq!(stats.competency_assessments.total, 1);

    Ok(())
}
