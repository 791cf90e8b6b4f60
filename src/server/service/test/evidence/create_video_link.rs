use super::*;

fn video(url: &str, teacher_id: Option<i32>) -> CreateVideoLinkDto {
    CreateVideoLinkDto {
        video_url: url.to_string(),
        video_title: "Demo lesson".to_string(),
        video_description: None,
        video_platform: None,
        evidence_type: EvidenceType::TeachingMedia,
        indicator_codes: Vec::new(),
        teacher_id,
    }
}

/// Tests that an admin records a link for a named teacher with the platform detected.
///
/// Expected: Ok with platform YOUTUBE
#[tokio::test]
async fn detects_platform() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, teacher) = factory::helpers::create_teacher_with_school(db).await?;
    let admin = factory::create_user(db).await?;

    let evidence = EvidenceService::new(db, &dir)
        .create_video_link(
            &User::from_entity(admin),
            video("https://youtu.be/abc123", Some(teacher.id)),
        )
        .await?;

    assert_eq!(evidence.teacher_id, teacher.id);
    assert_eq!(evidence.video_platform.as_deref(), Some("YOUTUBE"));
    assert!(evidence.stored_filename.is_none());

    Ok(())
}

/// Tests that non-http URLs are refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_http_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, user) = factory::helpers::create_teacher_account(db).await?;

    let result = EvidenceService::new(db, &dir)
        .create_video_link(&User::from_entity(user), video("ftp://example.com/a.mp4", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the platform comes from the host, and that malformed hosts are refused.
///
/// A platform name in the query string does not count.
///
/// Expected: Ok with platform OTHER, then Err(AppError::BadRequest) for a host with a space
#[tokio::test]
async fn detects_platform_from_host_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, user) = factory::helpers::create_teacher_account(db).await?;
    let caller = User::from_entity(user);
    let service = EvidenceService::new(db, &dir);

    let evidence = service
        .create_video_link(&caller, video("https://evil.example/?r=youtube.com", None))
        .await?;
    let malformed = service
        .create_video_link(&caller, video("https://exa mple.com/v", None))
        .await;

    assert_eq!(evidence.video_platform.as_deref(), Some("OTHER"));
    assert!(matches!(malformed, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that video links are tagged only with active catalog codes.
///
/// An inactive indicator counts as unknown.
///
/// Expected: Err(AppError::BadRequest) for the inactive code, Ok for the active one
#[tokio::test]
async fn rejects_unknown_indicator_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = upload_dir().await;

    let (_, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_indicator(db, "PER_1.1").await?;
    factory::indicator::IndicatorFactory::new(db, "PER_1.10")
        .inactive()
        .build()
        .await?;
    let caller = User::from_entity(user);
    let service = EvidenceService::new(db, &dir);

    let mut rejected = video("https://youtu.be/abc123", None);
    rejected.indicator_codes = vec!["PER_1.10".to_string()];
    let result = service.create_video_link(&caller, rejected).await;

    let mut accepted = video("https://youtu.be/abc123", None);
    accepted.indicator_codes = vec!["PER_1.1".to_string()];
    let evidence = service.create_video_link(&caller, accepted).await?;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(evidence.indicator_codes, vec!["PER_1.1".to_string()]);

    Ok(())
}
