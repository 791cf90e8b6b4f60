//! Shared helper utilities for factory methods.
//!
//! Provides the id counter used to keep unique columns unique across factories,
//! plus shortcuts that create an entity together with the rows it depends on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a school and a teacher assigned to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((school, teacher))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_teacher_with_school(
    db: &DatabaseConnection,
) -> Result<(entity::school::Model, entity::teacher::Model), DbErr> {
    let school = crate::factory::school::create_school(db).await?;
    let teacher = crate::factory::teacher::create_teacher(db, school.id).await?;

    Ok((school, teacher))
}

/// Creates a teacher (with school) and a TEACHER-role account linked to them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((teacher, user))` - The teacher record and the linked account
/// - `Err(DbErr)` - Database error during creation
pub async fn create_teacher_account(
    db: &DatabaseConnection,
) -> Result<(entity::teacher::Model, entity::user::Model), DbErr> {
    let (_, teacher) = create_teacher_with_school(db).await?;
    let user = crate::factory::user::UserFactory::new(db)
        .role(entity::sea_orm_active_enums::UserRole::Teacher)
        .teacher_id(Some(teacher.id))
        .build()
        .await?;

    Ok((teacher, user))
}
