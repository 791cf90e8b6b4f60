//! Reflective journal factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a journal entry for `teacher_id` covering `month` (formatted `YYYY-MM`).
///
/// # Arguments
/// - `db` - Database connection
/// - `teacher_id` - Id of an existing teacher
/// - `month` - Month the entry reflects on
///
/// # Returns
/// - `Ok(entity::reflective_journal::Model)` - Created entry
/// - `Err(DbErr)` - Database error during insert, including a duplicate month
pub async fn create_reflective_journal(
    db: &DatabaseConnection,
    teacher_id: i32,
    month: &str,
) -> Result<entity::reflective_journal::Model, DbErr> {
    let now = Utc::now();
    entity::reflective_journal::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id),
        month: ActiveValue::Set(month.to_string()),
        reflection_text: ActiveValue::Set(format!("Reflection for {}", month)),
        success_story: ActiveValue::Set(None),
        difficulty: ActiveValue::Set(None),
        support_request: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
