use super::*;

fn create_param(teacher_id: i32) -> CreateCompetencyAssessmentParam {
    CreateCompetencyAssessmentParam {
        teacher_id,
        assessment_period: AssessmentPeriod::Before,
        pedagogy_score: 3,
        classroom_score: 4,
        community_score: 3,
        professionalism_score: 5,
        overall_level: CompetencyLevel::Good,
        assessor: "Mentor A".to_string(),
        notes: None,
    }
}

/// Tests that a created assessment is returned with its teacher summary.
///
/// Expected: Ok with the teacher attached
#[tokio::test]
async fn creates_with_teacher_summary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;

    let created = AssessmentService::new(db)
        .create_competency(create_param(teacher.id))
        .await?;

    assert_eq!(created.teacher_id, teacher.id);
    assert_eq!(created.professionalism_score, 5);
    assert!(created.teacher.is_some());

    Ok(())
}

/// Tests that assessments are only recorded for existing teachers.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssessmentService::new(db)
        .create_competency(create_param(9999))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that updating or deleting a missing assessment reports not found.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn missing_assessment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AssessmentService::new(db);
    let updated = service
        .update_competency(UpdateCompetencyAssessmentParam {
            id: 9999,
            pedagogy_score: Some(4),
            ..Default::default()
        })
        .await;
    let deleted = service.delete_competency(9999).await;

    assert!(matches!(updated, Err(AppError::NotFound(_))));
    assert!(matches!(deleted, Err(AppError::NotFound(_))));

    Ok(())
}
