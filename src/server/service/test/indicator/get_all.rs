use super::*;

/// Tests that the catalog lists active indicators in order with their checks.
///
/// Expected: Ok with the two active indicators, each carrying its checks
#[tokio::test]
async fn lists_active_indicators_with_checks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::indicator::IndicatorFactory::new(db, "PRO_1.1")
        .check("COURSE_DESC", 50, false)
        .check("EVIDENCE_LINKED_SESSION", 50, true)
        .build()
        .await?;
    factory::create_indicator(db, "PER_1.1").await?;
    factory::indicator::IndicatorFactory::new(db, "PER_9.9")
        .inactive()
        .build()
        .await?;

    let indicators = IndicatorService::new(db).get_all(true).await?;

    let codes: Vec<&str> = indicators.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["PRO_1.1", "PER_1.1"]);
    let checks = indicators[0].sub_indicators.as_ref().unwrap();
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0].code, "COURSE_DESC");

    Ok(())
}

/// Tests that sub-indicators are left unloaded on request.
///
/// Expected: Ok with `sub_indicators` of None
#[tokio::test]
async fn skips_checks_when_not_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_indicator(db, "PRO_1.1").await?;

    let indicators = IndicatorService::new(db).get_all(false).await?;

    assert_eq!(indicators.len(), 1);
    assert!(indicators[0].sub_indicators.is_none());

    Ok(())
}

/// Tests filtering by aspect and by section.
///
/// Expected: Ok with only the SOCIAL indicator, then only the MENTORING one
#[tokio::test]
async fn filters_by_aspect_and_section() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_indicator(db, "PRO_1.1").await?;
    factory::indicator::IndicatorFactory::new(db, "SOC_1")
        .section("MENTORING")
        .from_round(3)
        .build()
        .await?;

    let service = IndicatorService::new(db);
    let social = service.get_by_aspect(IndicatorAspect::Social).await?;
    let mentoring = service.get_by_section("MENTORING").await?;
    let missing = service.get_by_code("PRO_7.7", true).await;

    assert_eq!(social.len(), 1);
    assert_eq!(social[0].code, "SOC_1");
    assert_eq!(mentoring.len(), 1);
    assert_eq!(mentoring[0].from_round, 3);
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
