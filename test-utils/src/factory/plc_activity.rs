//! PLC activity factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a school-level PLC activity on `plc_date` where the teacher participated.
///
/// # Arguments
/// - `db` - Database connection
/// - `teacher_id` - Id of an existing teacher
/// - `plc_date` - Date of the session
///
/// # Returns
/// - `Ok(entity::plc_activity::Model)` - Created activity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_plc_activity(
    db: &DatabaseConnection,
    teacher_id: i32,
    plc_date: NaiveDate,
) -> Result<entity::plc_activity::Model, DbErr> {
    entity::plc_activity::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id),
        plc_date: ActiveValue::Set(plc_date),
        plc_level: ActiveValue::Set("SCHOOL".to_string()),
        topic: ActiveValue::Set("Formative assessment".to_string()),
        role: ActiveValue::Set("PARTICIPANT".to_string()),
        takeaway: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
