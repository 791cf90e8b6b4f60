use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JournalDto {
    pub id: i32,
    pub teacher_id: i32,
    /// Month in `YYYY-MM` form
    pub month: String,
    pub reflection_text: String,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateJournalDto {
    pub teacher_id: i32,
    pub month: String,
    pub reflection_text: String,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateJournalDto {
    pub month: Option<String>,
    pub reflection_text: Option<String>,
    pub success_story: Option<String>,
    pub difficulty: Option<String>,
    pub support_request: Option<String>,
}
