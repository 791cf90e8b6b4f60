use super::*;

/// Tests scoring a teacher whose evidence covers one indicator in round 1.
///
/// The tagged manual check and the auto-detected linked evidence fill PRO_1.1. PER_1.1
/// has nothing, and the social indicator is not scored before round 3.
///
/// Expected: Ok with PRO_1.1 at 100, PER_1.1 at 0, overall 50 and no social criterion
#[tokio::test]
async fn scores_tagged_evidence_in_round_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_catalog(db).await?;
    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let evidence = factory::evidence::EvidenceFactory::new(db, teacher.id, user.id)
        .indicator_codes(&["COURSE_DESC"])
        .build()
        .await?;
    let admin = factory::create_user(db).await?;

    let result = CompletenessService::new(db)
        .for_teacher(&User::from_entity(admin), teacher.id, 1)
        .await?;

    assert_eq!(result.teacher_name, teacher.full_name);
    let scores: Vec<(&str, u32)> = result
        .indicators
        .iter()
        .map(|i| (i.code.as_str(), i.score))
        .collect();
    assert_eq!(scores, vec![("PRO_1.1", 100), ("PER_1.1", 0)]);
    assert_eq!(result.indicators[0].evidence_ids, vec![evidence.id]);
    assert_eq!(result.score, 50);
    assert!(result.pass_criteria.social.is_none());
    assert!(result.pass_criteria.professional.passed());
    assert!(!result.pass_criteria.personal.passed());
    assert!(!result.pass_criteria.overall());

    Ok(())
}

/// Tests that round 3 adds the social indicator and detects mentoring visits.
///
/// Expected: Ok with SOC_1 at 100 and a passed social criterion
#[tokio::test]
async fn round_three_scores_social_indicator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_catalog(db).await?;
    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_mentoring_visit(db, teacher.id).await?;

    let result = CompletenessService::new(db)
        .for_teacher(&User::from_entity(user), teacher.id, 3)
        .await?;

    let social = result
        .indicators
        .iter()
        .find(|i| i.code == "SOC_1")
        .map(|i| i.score);
    assert_eq!(social, Some(100));
    let criterion = result.pass_criteria.social.unwrap();
    assert_eq!(criterion.required, 1);
    assert!(criterion.passed());

    Ok(())
}

/// Tests that a TEACHER cannot score another teacher.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn teacher_cannot_view_other_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_catalog(db).await?;
    let (other, _) = factory::helpers::create_teacher_account(db).await?;
    let (_, user) = factory::helpers::create_teacher_account(db).await?;

    let result = CompletenessService::new(db)
        .for_teacher(&User::from_entity(user), other.id, 1)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that an unknown teacher id is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_teacher_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;

    let result = CompletenessService::new(db)
        .for_teacher(&User::from_entity(admin), 9999, 1)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
