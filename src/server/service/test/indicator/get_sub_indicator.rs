use super::*;

/// Tests that a check is returned with its parent indicator.
///
/// Expected: Ok with the parent code PRO_2.1
#[tokio::test]
async fn returns_check_with_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::indicator::IndicatorFactory::new(db, "PRO_2.1")
        .check("STUDENT_ANALYSIS", 100, false)
        .build()
        .await?;

    let detail = IndicatorService::new(db)
        .get_sub_indicator("STUDENT_ANALYSIS")
        .await?;

    assert_eq!(detail.sub_indicator.weight, 100);
    assert_eq!(detail.indicator.code, "PRO_2.1");

    Ok(())
}

/// Tests that checks under an inactive indicator are hidden.
///
/// Expected: Err(AppError::NotFound) and an empty sub-indicator list
#[tokio::test]
async fn hides_checks_of_inactive_indicator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::indicator::IndicatorFactory::new(db, "PRO_2.1")
        .check("STUDENT_ANALYSIS", 100, false)
        .inactive()
        .build()
        .await?;

    let service = IndicatorService::new(db);
    let result = service.get_sub_indicator("STUDENT_ANALYSIS").await;
    let listed = service.get_sub_indicators(Some("PRO_2.1")).await?;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(listed.is_empty());

    Ok(())
}
