use super::*;

/// Tests gathering a teacher account's data.
///
/// Linked portfolio items appear both in the evidence list and under their
/// self-assessment.
///
/// Expected: Ok with the teacher, one visit, one journal and the linked item
#[tokio::test]
async fn collects_teacher_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_mentoring_visit(db, teacher.id).await?;
    factory::create_reflective_journal(db, teacher.id, "2025-06").await?;
    let assessment = factory::create_self_assessment(db, teacher.id).await?;
    factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .self_assessment_id(Some(assessment.id))
        .build()
        .await?;

    let data = PdpaService::new(db, &dir)
        .my_data(User::from_entity(user))
        .await?;

    assert_eq!(data.teacher.map(|t| t.teacher.id), Some(teacher.id));
    assert_eq!(data.mentoring_visits.len(), 1);
    assert_eq!(data.reflective_journals.len(), 1);
    assert_eq!(data.evidence.len(), 1);
    assert_eq!(data.self_assessments.len(), 1);
    assert_eq!(data.self_assessments[0].portfolio_items.len(), 1);

    Ok(())
}

/// Tests an account without a teacher record.
///
/// Expected: Ok with only the account and no activity
#[tokio::test]
async fn account_without_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let admin = factory::create_user(db).await?;

    let data = PdpaService::new(db, &dir)
        .my_data(User::from_entity(admin))
        .await?;

    assert!(data.teacher.is_none());
    assert!(data.mentoring_visits.is_empty());
    assert!(data.evidence.is_empty());

    Ok(())
}
