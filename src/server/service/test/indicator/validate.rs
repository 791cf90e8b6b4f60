use super::*;

/// Tests that main and sub codes are checked against their own tables.
///
/// A sub code passed as a main code is invalid.
///
/// Expected: Ok with one error per kind, naming only the bad codes
#[tokio::test]
async fn reports_invalid_codes_per_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_indicator(db, "PRO_1.1").await?;

    let validation = IndicatorService::new(db)
        .validate(&IndicatorCodes {
            main: vec!["PRO_1.1".to_string(), "PRO_1.1_DOC".to_string()],
            sub: vec!["PRO_1.1_DOC".to_string(), "NOPE".to_string()],
        })
        .await?;

    assert!(!validation.is_valid());
    assert_eq!(
        validation.errors,
        vec![
            "Invalid main indicator codes: PRO_1.1_DOC".to_string(),
            "Invalid sub-indicator codes: NOPE".to_string(),
        ]
    );

    Ok(())
}

/// Tests that no codes at all is valid.
///
/// Expected: Ok with no errors
#[tokio::test]
async fn empty_request_is_valid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let validation = IndicatorService::new(db)
        .validate(&IndicatorCodes::default())
        .await?;

    assert!(validation.is_valid());

    Ok(())
}
