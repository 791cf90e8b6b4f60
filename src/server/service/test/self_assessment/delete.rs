use super::*;
use crate::server::data::evidence::EvidenceRepository;

/// Tests deleting an owned draft with a linked item.
///
/// The portfolio item survives with its link cleared.
///
/// Expected: Ok, assessment gone, item unlinked
#[tokio::test]
async fn deletes_draft_and_unlinks_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let draft = factory::create_self_assessment(db, teacher.id).await?;
    let item = factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .self_assessment_id(Some(draft.id))
        .build()
        .await?;

    let service = SelfAssessmentService::new(db);
    service.delete(&User::from_entity(user), draft.id).await?;

    assert!(matches!(
        service.get_by_id(draft.id).await,
        Err(AppError::NotFound(_))
    ));
    let item = EvidenceRepository::new(db).find_by_id(item.id).await?.unwrap();
    assert!(item.self_assessment_id.is_none());

    Ok(())
}

/// Tests that a reviewed assessment cannot be deleted.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_reviewed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let reviewed = factory::self_assessment::SelfAssessmentFactory::new(db, teacher.id)
        .status(SelfAssessmentStatus::Reviewed)
        .build()
        .await?;

    let result = SelfAssessmentService::new(db)
        .delete(&User::from_entity(user), reviewed.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
