use super::*;

/// Tests that a TEACHER cannot list another teacher's portfolio.
///
/// Expected: Err(AppError::Forbidden) for the other teacher, Ok for their own
#[tokio::test]
async fn teacher_sees_only_own() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let (other, other_user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_evidence(db, teacher.id, user.id).await?;
    factory::create_evidence(db, other.id, other_user.id).await?;

    let service = EvidenceService::new(db, &dir);
    let caller = User::from_entity(user);

    let own = service
        .get_by_teacher(&caller, teacher.id, EvidenceFilter::default())
        .await?;
    let foreign = service
        .get_by_teacher(&caller, other.id, EvidenceFilter::default())
        .await;

    assert_eq!(own.len(), 1);
    assert!(matches!(foreign, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that a mentor may list any teacher's portfolio.
///
/// Expected: Ok with the teacher's item
#[tokio::test]
async fn mentor_sees_any_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let mentor = factory::user::create_user_with_role(db, UserRole::Mentor).await?;
    factory::create_evidence(db, teacher.id, user.id).await?;

    let items = EvidenceService::new(db, &dir)
        .get_by_teacher(
            &User::from_entity(mentor),
            teacher.id,
            EvidenceFilter::default(),
        )
        .await?;

    assert_eq!(items.len(), 1);

    Ok(())
}
