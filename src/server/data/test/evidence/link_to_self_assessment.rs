use super::*;

/// Tests linking items to a self-assessment and clearing the links again.
///
/// Expected: Ok with both items linked, then none
#[tokio::test]
async fn links_and_unlinks_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let assessment = factory::create_self_assessment(db, teacher.id).await?;
    let first = factory::create_evidence(db, teacher.id, user.id).await?;
    let second = factory::create_evidence(db, teacher.id, user.id).await?;

    let repo = EvidenceRepository::new(db);
    repo.link_to_self_assessment(assessment.id, &[first.id, second.id])
        .await?;

    let linked = repo.get_by_self_assessment(assessment.id).await?;
    assert_eq!(linked.len(), 2);

    assert_eq!(repo.unlink_self_assessment(assessment.id).await?, 2);
    assert!(repo.get_by_self_assessment(assessment.id).await?.is_empty());

    Ok(())
}

/// Tests the ownership filter applied before linking.
///
/// Expected: Ok with only the teacher's own item id
#[tokio::test]
async fn owned_ids_excludes_foreign_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other, other_user) = factory::helpers::create_teacher_account(db).await?;
    let own = factory::create_evidence(db, teacher.id, user.id).await?;
    let foreign = factory::create_evidence(db, other.id, other_user.id).await?;

    let repo = EvidenceRepository::new(db);
    let owned = repo.owned_ids(teacher.id, &[own.id, foreign.id]).await?;

    assert_eq!(owned, vec![own.id]);

    Ok(())
}
