use super::*;

/// Tests that evidence tags may name an indicator or one of its checks.
///
/// Expected: Ok for known codes, Err(AppError::BadRequest) listing only the unknown one
#[tokio::test]
async fn accepts_indicator_and_check_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_indicator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_indicator(db, "PER_2.1").await?;

    let service = IndicatorService::new(db);
    service
        .ensure_known_codes(&["PER_2.1".to_string(), "PER_2.1_DOC".to_string()])
        .await?;
    let result = service
        .ensure_known_codes(&["PER_2.1".to_string(), "PER_2".to_string()])
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Unknown indicator codes: PER_2"),
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}
