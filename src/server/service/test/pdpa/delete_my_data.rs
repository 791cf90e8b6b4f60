use super::*;
use sea_orm::ConnectionTrait;

use crate::server::data::{
    mentoring_visit::MentoringVisitRepository, reflective_journal::ReflectiveJournalRepository,
};

/// Tests anonymizing an account.
///
/// Expected: Ok, account deactivated under a placeholder email, teacher scrubbed
#[tokio::test]
async fn anonymizes_account_and_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let user = User::from_entity(user);

    let result = PdpaService::new(db, &dir)
        .delete_my_data(&user, DeleteMyDataParam::Anonymize { categories: None })
        .await?;

    assert!(result.anonymized);
    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.email.starts_with("anonymized-"));
    assert!(stored.email.ends_with("@deleted.local"));
    assert!(!stored.is_active);
    let scrubbed = TeacherRepository::new(db)
        .find_with_school(teacher.id)
        .await?
        .unwrap();
    assert_eq!(scrubbed.teacher.full_name, ANONYMIZED_NAME);

    Ok(())
}

/// Tests deleting selected categories only.
///
/// Expected: Ok, journals gone, account and teacher kept
#[tokio::test]
async fn deletes_listed_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_reflective_journal(db, teacher.id, "2025-05").await?;
    factory::create_mentoring_visit(db, teacher.id).await?;
    let user = User::from_entity(user);

    let result = PdpaService::new(db, &dir)
        .delete_my_data(
            &user,
            DeleteMyDataParam::Categories(vec![DataCategory::Journals]),
        )
        .await?;

    assert_eq!(result.deleted_categories, vec![DataCategory::Journals]);
    assert_eq!(
        ReflectiveJournalRepository::new(db)
            .count_by_teacher(teacher.id)
            .await?,
        0
    );
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_some());
    assert!(TeacherRepository::new(db)
        .find_with_school(teacher.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting everything.
///
/// Expected: Ok, account and teacher removed
#[tokio::test]
async fn deletes_account_and_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_evidence(db, teacher.id, user.id).await?;
    let user = User::from_entity(user);

    let result = PdpaService::new(db, &dir)
        .delete_my_data(&user, DeleteMyDataParam::DeleteAll)
        .await?;

    assert!(result.deleted_all);
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert!(TeacherRepository::new(db)
        .find_with_school(teacher.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a category deletion failing part way leaves earlier categories intact.
///
/// Expected: Err, mentoring visits still present after the journal step fails
#[tokio::test]
async fn failed_category_deletion_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir();

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    factory::create_mentoring_visit(db, teacher.id).await?;
    db.execute_unprepared("DROP TABLE reflective_journal").await?;
    let user = User::from_entity(user);

    let result = PdpaService::new(db, &dir)
        .delete_my_data(
            &user,
            DeleteMyDataParam::Categories(vec![DataCategory::Mentoring, DataCategory::Journals]),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(
        MentoringVisitRepository::new(db)
            .count_by_teacher(teacher.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests that deleting everything removes stored evidence files once committed.
///
/// Expected: Ok, the uploaded file is gone from the upload directory
#[tokio::test]
async fn delete_all_removes_stored_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = std::env::temp_dir().join(format!("teachermon-pdpa-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await?;

    let (teacher, user) = factory::helpers::create_teacher_account(db).await?;
    let evidence = factory::create_evidence(db, teacher.id, user.id).await?;
    let stored = evidence.stored_filename.clone().unwrap();
    tokio::fs::write(dir.join(&stored), b"pdf").await?;
    let user = User::from_entity(user);

    PdpaService::new(db, &dir)
        .delete_my_data(&user, DeleteMyDataParam::DeleteAll)
        .await?;

    assert!(!dir.join(&stored).exists());

    tokio::fs::remove_dir_all(&dir).await?;
    Ok(())
}
