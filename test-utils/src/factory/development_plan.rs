//! Development plan factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a NOT_STARTED development plan running from 2025-01-01 to 2025-06-30.
///
/// # Arguments
/// - `db` - Database connection
/// - `teacher_id` - Id of an existing teacher
///
/// # Returns
/// - `Ok(entity::development_plan::Model)` - Created plan
/// - `Err(DbErr)` - Database error during insert
pub async fn create_development_plan(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::development_plan::Model, DbErr> {
    let now = Utc::now();
    entity::development_plan::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id),
        focus_competency: ActiveValue::Set("PEDAGOGY".to_string()),
        action_plan: ActiveValue::Set("Join lesson study cycle".to_string()),
        support_type: ActiveValue::Set("COACHING".to_string()),
        start_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()),
        end_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()),
        progress_status: ActiveValue::Set("NOT_STARTED".to_string()),
        progress_notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
